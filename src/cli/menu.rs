use anyhow::Result;
use log::{error, info, warn};
use std::io::{BufRead, Write};

use crate::cli::prompt::Console;
use crate::domain::enums::{MenuChoice, OrderSide, OrderType, TimeInForce};
use crate::domain::model::order::{parse_positive_decimal, validate_symbol, OrderDraft};
use crate::domain::traits::OrderGateway;
use crate::services::order_submitter::OrderSubmitter;

const MENU_LINES: &[&str] = &[
    "",
    "--- Place a New Order ---",
    "1. Market Order",
    "2. Limit Order",
    "3. Stop-Limit Order",
    "4. Exit",
];

/// Where the interactive session currently is
#[derive(Debug, Clone, PartialEq)]
pub enum CliState {
    Menu,
    Collect(OrderType),
    Submit(OrderDraft),
    Exit,
}

/// Interactive order entry: menu, per-type prompts, submission, repeat.
pub struct TradingCli<G, R, W> {
    submitter: OrderSubmitter<G>,
    console: Console<R, W>,
}

impl<G, R, W> TradingCli<G, R, W>
where
    G: OrderGateway,
    R: BufRead,
    W: Write,
{
    pub fn new(submitter: OrderSubmitter<G>, console: Console<R, W>) -> Self {
        Self { submitter, console }
    }

    pub fn submitter(&self) -> &OrderSubmitter<G> {
        &self.submitter
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs until the user picks Exit or the input closes.
    /// Only console I/O failures end the loop with an error.
    pub async fn run(&mut self) -> Result<()> {
        let mut state = CliState::Menu;
        loop {
            state = match state {
                CliState::Menu => self.menu()?,
                CliState::Collect(order_type) => self.collect(order_type)?,
                CliState::Submit(draft) => self.submit(draft).await?,
                CliState::Exit => {
                    info!("Exiting trading bot. Goodbye!");
                    return Ok(());
                }
            };
        }
    }

    fn menu(&mut self) -> Result<CliState> {
        for line in MENU_LINES {
            self.console.println(line)?;
        }

        let choice = match self.console.prompt("Enter order type (1-4): ")? {
            Some(choice) => choice,
            None => return Ok(CliState::Exit),
        };

        Ok(match MenuChoice::from_input(&choice) {
            Some(MenuChoice::Place(order_type)) => CliState::Collect(order_type),
            Some(MenuChoice::Exit) => CliState::Exit,
            None => {
                warn!("Invalid choice '{}'. Please select 1, 2, 3, or 4.", choice);
                CliState::Menu
            }
        })
    }

    /// Prompts for the fields `order_type` needs. Any bad field sends the
    /// user back to the menu.
    fn collect(&mut self, order_type: OrderType) -> Result<CliState> {
        let mut draft = OrderDraft::new(order_type);

        draft.symbol = match self.read_field("Enter trading pair (e.g., BTCUSDT): ")? {
            Ok(symbol) => {
                let symbol = symbol.to_uppercase();
                if let Err(e) = validate_symbol(&symbol) {
                    warn!("{}", e);
                    return Ok(CliState::Menu);
                }
                symbol
            }
            Err(next) => return Ok(next),
        };

        draft.side = match self.read_field("Enter order side (BUY/SELL): ")? {
            Ok(side) => match side.parse::<OrderSide>() {
                Ok(side) => side.as_str().to_string(),
                Err(e) => {
                    warn!("{}", e);
                    return Ok(CliState::Menu);
                }
            },
            Err(next) => return Ok(next),
        };

        draft.quantity = match self.read_positive("Quantity", "Enter quantity: ")? {
            Ok(quantity) => quantity,
            Err(next) => return Ok(next),
        };

        if order_type.requires_price() {
            let message = match order_type {
                OrderType::StopLimit => "Enter limit price for stop-limit order: ",
                _ => "Enter limit price: ",
            };
            match self.read_positive("Price", message)? {
                Ok(price) => draft.price = Some(price),
                Err(next) => return Ok(next),
            }
        }

        if order_type.requires_stop_price() {
            match self.read_positive("Stop price", "Enter stop price: ")? {
                Ok(stop_price) => draft.stop_price = Some(stop_price),
                Err(next) => return Ok(next),
            }
        }

        if order_type.uses_time_in_force() {
            let tif = match self.read_field("Enter TimeInForce (GTC/IOC/FOK, default GTC): ")? {
                Ok(tif) if tif.is_empty() => TimeInForce::default(),
                Ok(tif) => TimeInForce::parse(&tif).unwrap_or_else(|| {
                    warn!("Invalid TimeInForce. Using GTC.");
                    TimeInForce::default()
                }),
                Err(next) => return Ok(next),
            };
            draft.time_in_force = Some(tif.as_str().to_string());
        }

        Ok(CliState::Submit(draft))
    }

    // Inner `Err` is the state to move to instead of continuing
    fn read_field(&mut self, message: &str) -> Result<std::result::Result<String, CliState>> {
        Ok(match self.console.prompt(message)? {
            Some(text) => Ok(text),
            None => Err(CliState::Exit),
        })
    }

    fn read_positive(
        &mut self,
        field: &str,
        message: &str,
    ) -> Result<std::result::Result<String, CliState>> {
        let text = match self.read_field(message)? {
            Ok(text) => text,
            Err(next) => return Ok(Err(next)),
        };
        Ok(match parse_positive_decimal(field, &text) {
            Ok(_) => Ok(text),
            Err(e) => {
                warn!("{}", e);
                Err(CliState::Menu)
            }
        })
    }

    async fn submit(&mut self, draft: OrderDraft) -> Result<CliState> {
        match self.submitter.submit_draft(&draft).await {
            Ok(result) => {
                self.console.println("")?;
                for line in result.summary_lines() {
                    info!("{}", line);
                    self.console.println(&line)?;
                }
            }
            Err(_) => {
                error!("Order placement failed. See logs above for details.");
                self.console
                    .println("Order placement failed. See logs above for details.")?;
            }
        }
        Ok(CliState::Menu)
    }
}

use std::str::FromStr;

use crate::domain::errors::OrderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl FromStr for OrderSide {
    type Err = OrderError;

    /// Case-insensitive parse of user input; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(OrderError::Validation(format!(
                "Invalid side '{}'. Please enter 'BUY' or 'SELL'.",
                other
            ))),
        }
    }
}

/// Order types offered by the CLI. `StopLimit` is a local name: the futures
/// venue calls the same thing `STOP`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderType {
    Market,
    Limit,
    StopLimit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopLimit => "STOP_LIMIT",
        }
    }

    /// Order type as understood by the USDⓈ-M futures order endpoint
    pub fn venue_type(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopLimit => "STOP",
        }
    }

    pub fn requires_price(&self) -> bool {
        !matches!(self, OrderType::Market)
    }

    pub fn requires_stop_price(&self) -> bool {
        matches!(self, OrderType::StopLimit)
    }

    pub fn uses_time_in_force(&self) -> bool {
        self.requires_price()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeInForce {
    #[default]
    GTC,
    IOC,
    FOK,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::GTC => "GTC",
            TimeInForce::IOC => "IOC",
            TimeInForce::FOK => "FOK",
        }
    }

    /// Returns `None` for anything outside GTC/IOC/FOK so the caller can pick the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "GTC" => Some(TimeInForce::GTC),
            "IOC" => Some(TimeInForce::IOC),
            "FOK" => Some(TimeInForce::FOK),
            _ => None,
        }
    }
}

/// Selections on the main menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Place(OrderType),
    Exit,
}

impl MenuChoice {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::Place(OrderType::Market)),
            "2" => Some(MenuChoice::Place(OrderType::Limit)),
            "3" => Some(MenuChoice::Place(OrderType::StopLimit)),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

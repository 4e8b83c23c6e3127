// Standard library imports
use std::io::{self, IsTerminal, Write};

// External crate imports
use anyhow::Result;
use chrono::Local;
use dotenv::dotenv;
use log::{error, info, LevelFilter};

// Internal crate imports
use binance_futures_bot::cli::{load_credentials, Console, TradingCli};
use binance_futures_bot::config_loader::AppConfig;
use binance_futures_bot::domain::constants::{CONFIG_FILE, TESTNET_BASE_URL};
use binance_futures_bot::infrastructure::exchange::binance::BinanceFuturesClient;
use binance_futures_bot::services::OrderSubmitter;

// Single-threaded: one order in flight at a time
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = AppConfig::load_or_default(CONFIG_FILE)?;
    init_logging(config.log_level_filter());
    info!("Logger initialized");

    info!("--- Binance Futures Testnet Trading Bot ---");
    info!("Please ensure you have generated API credentials from your Binance Testnet account.");
    info!("Visit: {}", TESTNET_BASE_URL);
    info!(
        "For security, consider setting BINANCE_API_KEY and BINANCE_API_SECRET \
         as environment variables."
    );

    let interactive = io::stdin().is_terminal();
    let mut console =
        Console::new(io::stdin().lock(), io::stdout()).with_secret_masking(interactive);

    let keys = match load_credentials(|var| std::env::var(var).ok(), &mut console) {
        Ok(keys) => keys,
        Err(e) => {
            error!("{}. Exiting.", e);
            return Err(e.into());
        }
    };

    let client = BinanceFuturesClient::new(keys, &config.exchange)?;
    info!("Binance client initialized. Base URL: {}", client.base_url());

    // Fail fast if the venue is unreachable
    if let Err(e) = client.ping().await {
        error!("Failed to connect to Binance Futures API: {}", e);
        error!("Please check your internet connection or API endpoint.");
        return Err(e.into());
    }
    info!("Successfully connected to Binance Futures API.");

    let mut cli = TradingCli::new(OrderSubmitter::new(client), console);
    cli.run().await
}

/// `<timestamp> - <LEVEL> - <message>` on stdout
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

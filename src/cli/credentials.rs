use log::{error, info};
use std::io::{self, BufRead, Write};

use crate::cli::prompt::Console;
use crate::domain::constants::{ENV_API_KEY, ENV_API_SECRET};
use crate::domain::errors::OrderError;
use crate::infrastructure::exchange::binance::BinanceKeys;

/// Resolves the API key pair, preferring the environment and prompting for
/// whatever is missing. `lookup` stands in for `std::env::var`.
///
/// Empty values count as missing. Fails when either value is still empty
/// after prompting.
pub fn load_credentials<F, R, W>(
    lookup: F,
    console: &mut Console<R, W>,
) -> Result<BinanceKeys, OrderError>
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
{
    let api_key = match env_value(&lookup, ENV_API_KEY, "API Key") {
        Some(value) => value,
        None => console
            .prompt("Enter your Binance Testnet API Key: ")
            .map_err(|e| read_failure("API Key", e))?
            .unwrap_or_default(),
    };
    let api_secret = match env_value(&lookup, ENV_API_SECRET, "API Secret") {
        Some(value) => value,
        None => console
            .prompt_secret("Enter your Binance Testnet API Secret: ")
            .map_err(|e| read_failure("API Secret", e))?
            .unwrap_or_default(),
    };

    if api_key.is_empty() || api_secret.is_empty() {
        error!("API Key and Secret cannot be empty.");
        return Err(OrderError::Configuration(
            "API Key and Secret cannot be empty".to_string(),
        ));
    }

    Ok(BinanceKeys { api_key, api_secret })
}

fn env_value<F>(lookup: &F, var: &str, label: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())?;
    info!("Using {} from environment variable.", label);
    Some(value)
}

fn read_failure(label: &str, e: io::Error) -> OrderError {
    OrderError::Configuration(format!("Failed to read {}: {}", label, e))
}

use anyhow::{anyhow, Result};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::domain::constants::{DEFAULT_RECV_WINDOW_MS, DEFAULT_TIMEOUT_MS, TESTNET_BASE_URL};

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub exchange: ExchangeConfig,
    #[serde(default)]
    pub app: AppInfo,
}

/// Venue connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            recv_window_ms: default_recv_window_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    TESTNET_BASE_URL.to_string()
}

fn default_recv_window_ms() -> u64 {
    DEFAULT_RECV_WINDOW_MS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Application information
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Read the file
        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        // Parse the TOML
        let config = Self::from_toml_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!("Exchange base URL: {}", config.exchange.base_url);

        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Like `from_file`, but a missing file just means "use the defaults".
    /// A file that exists and does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn log_level_filter(&self) -> LevelFilter {
        self.app.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.exchange.timeout_ms)
    }
}

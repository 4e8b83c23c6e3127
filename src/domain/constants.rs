// Environment variables holding the testnet credentials
pub const ENV_API_KEY: &str = "BINANCE_API_KEY";
pub const ENV_API_SECRET: &str = "BINANCE_API_SECRET";

// USDⓈ-M futures REST endpoints
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";
pub const ORDER_PATH: &str = "/fapi/v1/order";
pub const PING_PATH: &str = "/fapi/v1/ping";
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub const DEFAULT_RECV_WINDOW_MS: u64 = 5000;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const CONFIG_FILE: &str = "./config.toml";

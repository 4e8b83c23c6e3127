pub mod credentials;
pub mod menu;
pub mod prompt;

pub use credentials::load_credentials;
pub use menu::{CliState, TradingCli};
pub use prompt::Console;

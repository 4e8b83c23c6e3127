pub mod cli;
pub mod config_loader;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::*;
pub use domain::model::order::*;
pub use domain::model::order_result::*;
pub use domain::traits::*;
pub use infrastructure::exchange::binance::*;
pub use services::*;

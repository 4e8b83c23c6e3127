pub mod client;
pub mod parsers;
pub mod signer;

pub use client::{BinanceFuturesClient, BinanceKeys};

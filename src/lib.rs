#![doc = include_str!("../README.md")]

pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod tools;

pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use tools::fetch::{fetch_calculated_item, fetch_calculated_item_with, FetchOutcome};
pub use tools::simplify::simplify;

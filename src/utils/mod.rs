/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing timestamp and date helpers for request parameters
pub mod time;

pub use config::*;
pub use logger::*;
pub use time::*;

//! Step definitions for the behavioural test suite.

mod config_steps;
mod logging_steps;

pub use config_steps::ConfigWorld;
pub use logging_steps::LoggerWorld;

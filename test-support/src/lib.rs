//! Test support utilities.

pub mod config;
pub mod env_guard;
pub mod logging;

pub use config::{SAMPLE_CONFIG, write_config};
pub use logging::CapturedOutput;

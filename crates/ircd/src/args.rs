//! Command-line arguments for the `ircd` binary.

use std::path::PathBuf;

use clap::Parser;
use ircd_lib::{DEFAULT_CONFIG_PATH, DEFAULT_ENV_PREFIX, Level};

/// Command-line arguments for the daemon.
#[derive(Debug, Clone, Parser)]
#[command(name = "ircd", about = "IRC daemon")]
pub struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Log threshold, overriding `logging.level` from the configuration.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<Level>,

    /// Prefix of environment variables that override configuration values.
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_ENV_PREFIX)]
    pub env_prefix: String,

    /// Ignore environment overrides.
    #[arg(long)]
    pub no_env: bool,
}

impl Args {
    /// The override prefix, or `None` when overrides are disabled.
    pub fn env_prefix(&self) -> Option<&str> {
        (!self.no_env).then_some(self.env_prefix.as_str())
    }
}

//! Entry point for the ircd daemon binary.
//! Builds the configuration store and operator logger, then runs the startup
//! sequence. Exits with status 1 when configuration cannot be loaded.

use std::process::ExitCode;

use clap::Parser;
use ircd::args::Args;
use ircd::config::ConfigStore;
use ircd::daemon;
use ircd::logging::{self, LeveledLogger};

fn main() -> ExitCode {
    logging::init_diagnostics();
    let args = Args::parse();
    let store = ConfigStore::new();
    let logger = LeveledLogger::stdout();

    match daemon::run(&args, &store, &logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

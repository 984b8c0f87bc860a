//! Library components for the ircd daemon.
//!
//! # Overview
//! This crate exposes:
//! - [`config::ConfigStore`] — a YAML configuration document with typed,
//!   dotted-path lookups and defaulted variants that never fail.
//! - [`logging::LeveledLogger`] — a threshold-filtered, timestamped logger
//!   whose lines never interleave across threads.
//! - [`daemon::run`] — the startup sequence tying the two together.
//!
//! # Examples
//! ```rust,no_run
//! use clap::Parser;
//! use ircd::{args::Args, config::ConfigStore, logging::LeveledLogger};
//!
//! let args = Args::parse();
//! let store = ConfigStore::new();
//! let logger = LeveledLogger::stdout();
//! ircd::daemon::run(&args, &store, &logger).expect("startup must succeed");
//! ```
pub mod args;
pub mod config;
pub mod daemon;
pub mod logging;
pub mod settings;

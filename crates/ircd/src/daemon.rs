//! Daemon startup for ircd.
//!
//! This module runs the startup sequence: load the configuration, apply
//! environment overrides, derive [`Settings`], set the log threshold, and
//! announce what the server would bind to. No socket is opened yet.
use anyhow::{Context, Result};

use crate::args::Args;
use crate::config::{ConfigStore, Document};
use crate::logging::{LeveledLogger, LogError};
use crate::settings::Settings;
use crate::{log_debug, log_info};

/// Load the configuration named by `args` into `store`.
///
/// The document is fully built, overrides included, before it replaces the
/// store's current document.
pub fn load_config(store: &ConfigStore, args: &Args) -> Result<()> {
    let mut document = Document::from_file(&args.config)?;
    if let Some(prefix) = args.env_prefix() {
        document = document.with_env_overrides(prefix)?;
    }
    store.replace(document);
    Ok(())
}

/// Write the startup announcement for `settings`.
pub fn announce(settings: &Settings, logger: &LeveledLogger) -> Result<(), LogError> {
    let server = &settings.server;
    log_info!(logger, "ircd is starting up...")?;
    log_info!(logger, "Server name: {}", server.name)?;
    log_info!(logger, "Binding to {}:{}", server.bind_address, server.port)?;
    log_info!(logger, "Max connections: {}", server.max_connections)?;

    log_info!(logger, "ircd has started")?;
    log_debug!(logger, "ircd is running on port {}", server.port)?;

    if let Some(ssl) = &settings.ssl {
        log_info!(logger, "SSL enabled on port {}", ssl.port)?;
    }

    log_debug!(
        logger,
        "Ping timeout: {}s, Max channels per user: {}",
        settings.features.ping_timeout.as_secs(),
        settings.features.max_channels_per_user
    )?;
    Ok(())
}

/// Run the startup sequence.
///
/// The log threshold comes from `--log-level` when given, otherwise from
/// `logging.level`.
pub fn run(args: &Args, store: &ConfigStore, logger: &LeveledLogger) -> Result<()> {
    load_config(store, args)?;
    let settings = Settings::from_store(store)?;
    logger.set_level(args.log_level.unwrap_or(settings.log_level));
    tracing::debug!(?settings, level = %logger.level(), "startup settings resolved");
    announce(&settings, logger).context("failed to write startup log")?;
    Ok(())
}

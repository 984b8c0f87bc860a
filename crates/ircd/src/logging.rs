//! Logging for the daemon.
//!
//! Two streams are kept apart:
//!
//! - [`LeveledLogger`] writes the operator log: one
//!   `YYYY-MM-DD HH:MM:SS [LEVEL] message` line per record, filtered by a
//!   runtime threshold, to stdout by default.
//! - [`init_diagnostics`] installs a `tracing` subscriber for internal
//!   diagnostics, filtered by `RUST_LOG` and written to stderr.

use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::Local;
use ircd_lib::Level;
use thiserror::Error;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors surfaced by [`LeveledLogger::log`].
#[derive(Debug, Error)]
pub enum LogError {
    /// A formatting argument failed to render.
    #[error("failed to format log message")]
    Format(#[from] fmt::Error),
    /// The sink rejected the rendered line.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}

/// Threshold-filtered logger writing whole lines to a shared sink.
///
/// Records below the threshold are dropped before their arguments are
/// rendered. Lines from concurrent callers never interleave.
///
/// # Examples
///
/// ```rust
/// use ircd::log_info;
/// use ircd::logging::LeveledLogger;
/// use ircd_lib::Level;
///
/// let logger = LeveledLogger::stdout();
/// logger.set_level(Level::Warning);
/// log_info!(logger, "suppressed: {}", 42).expect("nothing written");
/// ```
pub struct LeveledLogger {
    threshold: AtomicU8,
    writer: BoxMakeWriter,
    write_lock: Mutex<()>,
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("threshold", &self.level())
            .finish_non_exhaustive()
    }
}

impl LeveledLogger {
    /// A logger writing to stdout with an `INFO` threshold.
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout)
    }

    /// A logger writing to `writer` with an `INFO` threshold.
    pub fn with_writer<W>(writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        Self {
            threshold: AtomicU8::new(Level::default() as u8),
            writer: BoxMakeWriter::new(writer),
            write_lock: Mutex::new(()),
        }
    }

    /// Change the threshold for records logged from now on.
    ///
    /// Changes are last-write-wins across threads.
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Release);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Acquire))
    }

    /// Whether a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Render and write one record.
    ///
    /// Does nothing when `level` is below the threshold. Otherwise the line is
    /// rendered in full before the sink is touched, so a formatting failure
    /// leaves no partial output.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        if !self.enabled(level) {
            return Ok(());
        }
        let line = render(level, &Local::now().format(TIMESTAMP_FORMAT), args)?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut sink = self.writer.make_writer();
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.log(Level::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.log(Level::Info, args)
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.log(Level::Warning, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.log(Level::Error, args)
    }

    pub fn fatal(&self, args: fmt::Arguments<'_>) -> Result<(), LogError> {
        self.log(Level::Fatal, args)
    }
}

fn render(
    level: Level,
    timestamp: &impl fmt::Display,
    args: fmt::Arguments<'_>,
) -> Result<String, fmt::Error> {
    let mut line = String::new();
    write!(line, "{timestamp} [{level}] ")?;
    line.write_fmt(args)?;
    line.push('\n');
    Ok(line)
}

/// Log through a [`LeveledLogger`] at `DEBUG`.
///
/// Expands to a `Result<(), LogError>`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Log through a [`LeveledLogger`] at `INFO`.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log through a [`LeveledLogger`] at `WARNING`.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format_args!($($arg)+))
    };
}

/// Log through a [`LeveledLogger`] at `ERROR`.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

/// Log through a [`LeveledLogger`] at `FATAL`.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}

/// Initialize the global tracing subscriber for diagnostics.
///
/// Filter settings come from the `RUST_LOG` environment variable and events
/// go to stderr, keeping stdout for the operator log.
///
/// # Examples
///
/// ```rust,no_run
/// use ircd::logging::init_diagnostics;
///
/// init_diagnostics();
/// tracing::debug!("diagnostics are initialized");
/// ```
pub fn init_diagnostics() {
    init_diagnostics_with_writer(BoxMakeWriter::new(io::stderr));
}

/// Initialize diagnostics with a custom writer.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_diagnostics_with_writer<W>(writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let _ = tracing_fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init();
}

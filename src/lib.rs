//! Shared types for the ircd project.
//!
//! This library defines the severity levels and configuration defaults
//! used by the daemon and its test harness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file read when no `--config` argument is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
/// Prefix for environment variables that override configuration values.
pub const DEFAULT_ENV_PREFIX: &str = "IRCD_";

/// Server name announced when `server.name` is not configured.
pub const DEFAULT_SERVER_NAME: &str = "DefaultIRCd";
/// Plain-text client port.
pub const DEFAULT_PORT: u16 = 6667;
/// Address the listener would bind to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Upper bound on simultaneous client connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 100;
/// TLS client port.
pub const DEFAULT_SSL_PORT: u16 = 6697;
/// Seconds of silence before a client is pinged.
pub const DEFAULT_PING_TIMEOUT_SECS: u64 = 120;
/// Channels a single user may join.
pub const DEFAULT_MAX_CHANNELS_PER_USER: u32 = 10;

/// Severity attached to a log record.
///
/// Levels are ordered, so a threshold comparison is a plain `>=`.
/// The textual form is the upper-case name in both configuration files and
/// on the command line.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

impl Level {
    /// Every level, lowest severity first.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Upper-case name used in rendered log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Recover a level from its `repr(u8)` discriminant.
    ///
    /// Out-of-range values saturate to [`Level::Fatal`].
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warning,
            3 => Self::Error,
            _ => Self::Fatal,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}', expected one of DEBUG, INFO, WARNING, ERROR, FATAL")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, ParseLevelError};
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        let mut shuffled = [
            Level::Error,
            Level::Debug,
            Level::Fatal,
            Level::Info,
            Level::Warning,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Level::ALL);
    }

    #[test]
    fn serialises_to_upper_case_name() {
        let value = serde_json::to_value(Level::Warning)
            .unwrap_or_else(|e| panic!("serialisation failed: {e}"));
        assert_eq!(value, json!("WARNING"));
    }

    #[test]
    fn deserialises_from_yaml_scalar() {
        let level: Level =
            serde_yaml::from_str("ERROR").unwrap_or_else(|e| panic!("parse failed: {e}"));
        assert_eq!(level, Level::Error);
    }

    #[test]
    fn rejects_lower_case_names() {
        let result: Result<Level, _> = serde_yaml::from_str("debug");
        assert!(result.is_err());
        assert_eq!(
            "debug".parse::<Level>(),
            Err(ParseLevelError(String::from("debug")))
        );
    }

    #[test]
    fn display_matches_parse() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn discriminant_round_trips() {
        for level in Level::ALL {
            assert_eq!(Level::from_u8(level as u8), level);
        }
        assert_eq!(Level::from_u8(200), Level::Fatal);
    }
}

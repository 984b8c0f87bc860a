//! Typed startup settings read from the configuration store.
//!
//! Every value falls back to its default from [`ircd_lib`] when it is
//! missing or has the wrong type. The one exception is `ssl.enabled`: when
//! present it must be a boolean, and anything else is reported as an error.

use std::time::Duration;

use ircd_lib::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MAX_CHANNELS_PER_USER, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PING_TIMEOUT_SECS, DEFAULT_PORT, DEFAULT_SERVER_NAME, DEFAULT_SSL_PORT, Level,
};

use crate::config::{ConfigError, ConfigStore};

/// Settings under the `server` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub name: String,
    pub port: u16,
    pub bind_address: String,
    pub max_connections: u32,
}

/// TLS listener settings; only built when `ssl.enabled` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SslSettings {
    pub port: u16,
}

/// Settings under the `features` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSettings {
    pub ping_timeout: Duration,
    pub max_channels_per_user: u32,
}

/// Everything the startup sequence reads from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Threshold taken from `logging.level`; unknown names fall back to `INFO`.
    pub log_level: Level,
    pub server: ServerSettings,
    pub ssl: Option<SslSettings>,
    pub features: FeatureSettings,
}

impl Settings {
    /// Read settings from `store`.
    ///
    /// Fails only when `ssl.enabled` exists and is not a boolean.
    pub fn from_store(store: &ConfigStore) -> Result<Self, ConfigError> {
        let server = ServerSettings {
            name: store.get_nested_or("server.name", DEFAULT_SERVER_NAME.to_owned()),
            port: store.get_nested_or("server.port", DEFAULT_PORT),
            bind_address: store
                .get_nested_or("server.bind_address", DEFAULT_BIND_ADDRESS.to_owned()),
            max_connections: store.get_nested_or("server.max_connections", DEFAULT_MAX_CONNECTIONS),
        };

        let ssl_enabled =
            store.has_nested_path("ssl.enabled") && store.get_nested::<bool>("ssl.enabled")?;
        let ssl = ssl_enabled.then(|| SslSettings {
            port: store.get_nested_or("ssl.port", DEFAULT_SSL_PORT),
        });

        let features = FeatureSettings {
            ping_timeout: Duration::from_secs(
                store.get_nested_or("features.ping_timeout", DEFAULT_PING_TIMEOUT_SECS),
            ),
            max_channels_per_user: store
                .get_nested_or("features.max_channels_per_user", DEFAULT_MAX_CHANNELS_PER_USER),
        };

        Ok(Self {
            log_level: store.get_nested_or("logging.level", Level::default()),
            server,
            ssl,
            features,
        })
    }
}

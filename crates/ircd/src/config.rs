//! Configuration store for the ircd daemon.
//!
//! The daemon reads a YAML document (by default `config.yaml`) once at
//! startup and answers typed lookups against it, either by top-level key or
//! by dotted path such as `server.port`. Every lookup comes in two shapes: a
//! strict one that reports why it failed, and a defaulted one that never
//! fails.
//!
//! ```rust
//! use ircd::config::ConfigStore;
//!
//! let store = ConfigStore::new();
//! store.load_str("server:\n  port: 6667\n").expect("valid YAML");
//! assert_eq!(store.get_nested::<u16>("server.port").expect("present"), 6667);
//! assert_eq!(store.get_nested_or("ssl.port", 6697_u16), 6697);
//! ```

mod document;
mod path;

pub use document::Document;
pub use path::ConfigPath;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by loading or strict lookups.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("could not open config file '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The text is not well-formed YAML.
    #[error("failed to parse config '{origin}': {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
    /// No value exists at the requested key or path.
    #[error("configuration key '{path}' not found")]
    KeyNotFound { path: String },
    /// A value exists but cannot be converted to the requested type.
    #[error("configuration value at '{path}' has the wrong type: {source}")]
    TypeMismatch {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    /// An environment override could not be converted into a document value.
    #[error("failed to apply environment override '{prefix}*' at '{key}': {source}")]
    Override {
        prefix: String,
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Shared handle to the active configuration document.
///
/// Clones share one snapshot slot. Loads build a complete document before
/// swapping it in, so readers observe either the old or the new document and
/// a failed load leaves the current one in place.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    inner: Arc<ArcSwap<Document>>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// An unloaded store. Lookups miss until a document is loaded.
    pub fn new() -> Self {
        Self::from_document(Document::empty())
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(document)),
        }
    }

    /// Replace the document with the contents of the YAML file at `path`.
    pub fn load_file(&self, path: &Path) -> Result<(), ConfigError> {
        let document = Document::from_file(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "configuration load failed");
        })?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        self.replace(document);
        Ok(())
    }

    /// Replace the document with parsed YAML `text`.
    pub fn load_str(&self, text: &str) -> Result<(), ConfigError> {
        self.replace(Document::from_yaml_str(text)?);
        Ok(())
    }

    pub fn replace(&self, document: Document) {
        self.inner.store(Arc::new(document));
    }

    /// The current document, unaffected by later loads.
    pub fn snapshot(&self) -> Arc<Document> {
        self.inner.load_full()
    }

    /// Look up the top-level `key` and convert it to `T`.
    ///
    /// The key is used literally; a dot inside it does not descend.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        self.lookup(key, &ConfigPath::key(key))
    }

    /// Like [`ConfigStore::get`], returning `default` on any failure.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Look up a dotted `path` and convert the value to `T`.
    ///
    /// Missing keys and non-mapping intermediate nodes both report
    /// [`ConfigError::KeyNotFound`].
    pub fn get_nested<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConfigError> {
        self.lookup(path, &ConfigPath::parse(path))
    }

    /// Like [`ConfigStore::get_nested`], returning `default` on any failure.
    pub fn get_nested_or<T: DeserializeOwned>(&self, path: &str, default: T) -> T {
        self.get_nested(path).unwrap_or(default)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.inner.load().resolve(&ConfigPath::key(key)).is_some()
    }

    /// `true` when every segment of `path` resolves.
    pub fn has_nested_path(&self, path: &str) -> bool {
        self.inner.load().resolve(&ConfigPath::parse(path)).is_some()
    }

    fn lookup<T: DeserializeOwned>(&self, raw: &str, path: &ConfigPath) -> Result<T, ConfigError> {
        let document = self.inner.load();
        let node = document
            .resolve(path)
            .ok_or_else(|| ConfigError::KeyNotFound {
                path: raw.to_owned(),
            })?;
        T::deserialize(node).map_err(|source| ConfigError::TypeMismatch {
            path: raw.to_owned(),
            source,
        })
    }
}

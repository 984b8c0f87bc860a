//! The parsed configuration tree.

use std::fs;
use std::path::Path;

use figment::providers::Env;
use figment::value::Value as EnvValue;
use serde_yaml::{Mapping, Value};

use super::{ConfigError, ConfigPath};

/// An immutable YAML document.
///
/// Documents are built whole and never edited in place; the store swaps one
/// document for another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// A document with nothing in it. Every non-root lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse YAML text.
    ///
    /// An empty string parses to an empty document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text.as_bytes(), "<string>")
    }

    /// Read and parse a YAML file.
    ///
    /// Failing to read the file yields [`ConfigError::Load`]; malformed text,
    /// including text that is not UTF-8, yields [`ConfigError::Parse`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes, &path.display().to_string())
    }

    fn parse(bytes: &[u8], origin: &str) -> Result<Self, ConfigError> {
        let root = serde_yaml::from_slice(bytes).map_err(|source| ConfigError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walk `path` from the root one mapping key at a time.
    ///
    /// Returns `None` when a key is missing or when a scalar or sequence is
    /// reached before the path ends.
    pub fn resolve(&self, path: &ConfigPath) -> Option<&Value> {
        path.segments()
            .try_fold(&self.root, |node, segment| node.as_mapping()?.get(segment))
    }

    /// Overlay environment variables named `<prefix><KEY>` onto the document.
    ///
    /// Nested keys are separated by `__` and lower-cased, so
    /// `IRCD_SERVER__PORT=7000` replaces `server.port`. Missing mappings along
    /// the way are created. Each variable is written at its own path and the
    /// rest of the document is left as parsed.
    ///
    /// Values are typed the way figment's `Env` provider types them, so `7000`
    /// becomes an integer and `true` a boolean. The exception is a path that
    /// already holds a string: there the raw text is kept, so
    /// `IRCD_SERVER__NAME=42` yields the string `"42"`. When no variable
    /// carries the prefix the document is returned unchanged.
    pub fn with_env_overrides(mut self, prefix: &str) -> Result<Self, ConfigError> {
        let overrides: Vec<(String, String)> = Env::prefixed(prefix)
            .split("__")
            .iter()
            .map(|(key, raw)| (key.as_str().to_ascii_lowercase(), raw))
            .collect();
        if overrides.is_empty() {
            return Ok(self);
        }
        tracing::debug!(
            prefix,
            overrides = ?overrides.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            "applying environment overrides"
        );

        for (key, raw) in overrides {
            insert_override(&mut self.root, &key, raw).map_err(|source| {
                ConfigError::Override {
                    prefix: prefix.to_owned(),
                    key,
                    source,
                }
            })?;
        }
        Ok(self)
    }
}

/// Write `raw` at the dotted `key` below `root`.
///
/// Any node on the way that is not a mapping is replaced by an empty one.
fn insert_override(root: &mut Value, key: &str, raw: String) -> Result<(), serde_yaml::Error> {
    let mut segments = key.split('.');
    let Some(last) = segments.next_back() else {
        return Ok(());
    };
    let mut node = root;
    for segment in segments {
        node = mapping_mut(node)
            .entry(Value::String(segment.to_owned()))
            .or_insert(Value::Null);
    }
    let mapping = mapping_mut(node);
    let value = match mapping.get(last) {
        Some(Value::String(_)) => Value::String(raw),
        _ => match raw.parse::<EnvValue>() {
            Ok(typed) => serde_yaml::to_value(typed)?,
            Err(never) => match never {},
        },
    };
    mapping.insert(Value::String(last.to_owned()), value);
    Ok(())
}

fn mapping_mut(node: &mut Value) -> &mut Mapping {
    if !node.is_mapping() {
        *node = Value::Mapping(Mapping::new());
    }
    match node {
        Value::Mapping(mapping) => mapping,
        _ => unreachable!("node was just replaced by a mapping"),
    }
}

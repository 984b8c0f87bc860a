//! Dotted configuration paths.

use std::fmt;

/// A location in the configuration document, as a sequence of mapping keys.
///
/// Parsing splits on `.` and drops empty segments, so `server.port`,
/// `.server.port.` and `server..port` all address the same value. A path with
/// no segments addresses the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConfigPath {
    segments: Vec<String>,
}

impl ConfigPath {
    /// Split a dotted path into its non-empty segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use ircd::config::ConfigPath;
    ///
    /// let path = ConfigPath::parse("server..port.");
    /// assert_eq!(path.segments().collect::<Vec<_>>(), ["server", "port"]);
    /// ```
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// A single top-level key, taken literally.
    ///
    /// Dots inside `key` are not treated as separators.
    pub fn key(key: &str) -> Self {
        Self {
            segments: vec![key.to_owned()],
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// `true` when the path addresses the document root.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

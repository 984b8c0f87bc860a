//! Helpers for writing daemon configuration files in tests.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

/// A complete configuration exercising every key the daemon reads.
pub const SAMPLE_CONFIG: &str = "\
logging:
  level: DEBUG
server:
  name: irc.example.net
  port: 6668
  bind_address: 127.0.0.1
  max_connections: 250
ssl:
  enabled: true
  port: 6699
features:
  ping_timeout: 90
  max_channels_per_user: 20
";

/// Write `yaml` to `config.yaml` inside `dir` and return its path.
///
/// # Examples
///
/// ```rust
/// use test_support::{SAMPLE_CONFIG, write_config};
///
/// let dir = tempfile::tempdir().expect("create tempdir");
/// let path = write_config(&dir, SAMPLE_CONFIG).expect("write config");
/// assert!(path.ends_with("config.yaml"));
/// ```
pub fn write_config(dir: &TempDir, yaml: &str) -> io::Result<PathBuf> {
    let path = dir.path().join("config.yaml");
    fs::write(&path, yaml)?;
    Ok(path)
}

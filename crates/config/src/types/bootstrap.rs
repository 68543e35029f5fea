//! Bootstrap configuration type.
//!
//! Responsibilities:
//! - Define `BootstrapConfig`, the process-wide settings that locate tool configuration.
//! - Read a bootstrap document from a single JSON file.
//!
//! Does NOT handle:
//! - Locating the bootstrap file or applying environment overrides (see `bootstrap` module).
//! - Resolving per-tool layers (see `loader::resolve`).
//!
//! Invariants:
//! - `alc_path` is required; `load_pattern` defaults to an empty list.
//! - Unknown keys in the bootstrap document are ignored.
//! - The value is immutable once handed to a resolver.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::loader::ConfigError;

/// Settings that locate every tool's configuration layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Root directory under which each tool has its own folder.
    pub alc_path: PathBuf,
    /// Ordered file-name templates for optional override layers.
    ///
    /// Templates may embed environment placeholders such as `$SHOW` or `${SITE}`.
    #[serde(default)]
    pub load_pattern: Vec<String>,
}

impl BootstrapConfig {
    /// Create a bootstrap config directly.
    pub fn new(alc_path: impl Into<PathBuf>, load_pattern: Vec<String>) -> Self {
        Self {
            alc_path: alc_path.into(),
            load_pattern,
        }
    }

    /// Read and parse a bootstrap document from `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BootstrapRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::BootstrapParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_reads_both_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"alc_path": "/srv/alc", "load_pattern": ["$TOOL.all.json", "$TOOL.$SITE.json"]}}"#
        )
        .unwrap();

        let config = BootstrapConfig::from_path(file.path()).unwrap();
        assert_eq!(config.alc_path, PathBuf::from("/srv/alc"));
        assert_eq!(
            config.load_pattern,
            vec!["$TOOL.all.json".to_string(), "$TOOL.$SITE.json".to_string()]
        );
    }

    #[test]
    fn test_load_pattern_defaults_to_empty() {
        let config: BootstrapConfig = serde_json::from_str(r#"{"alc_path": "conf"}"#).unwrap();
        assert!(config.load_pattern.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: BootstrapConfig =
            serde_json::from_str(r#"{"alc_path": "conf", "version": 2}"#).unwrap();
        assert_eq!(config.alc_path, PathBuf::from("conf"));
    }

    #[test]
    fn test_missing_alc_path_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"load_pattern": []}}"#).unwrap();

        let err = BootstrapConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::BootstrapParse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BootstrapConfig::from_path(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::BootstrapRead { .. }));
    }
}

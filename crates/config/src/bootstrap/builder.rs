//! Bootstrap configuration loader builder.
//!
//! Responsibilities:
//! - Provide a builder-pattern `BootstrapLoader` that layers builder values,
//!   environment overrides, and the bootstrap file.
//! - Build the final `BootstrapConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Platform directory lookup (delegated to path.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over bootstrap file values.
//! - The bootstrap file is optional only when `alc_path` is already known.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::path::default_bootstrap_path;
use crate::loader::ConfigError;
use crate::types::BootstrapConfig;

/// Bootstrap file contents before overrides are applied. All fields optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BootstrapFile {
    alc_path: Option<PathBuf>,
    load_pattern: Option<Vec<String>>,
}

impl BootstrapFile {
    fn read(path: &Path) -> Result<Self, ConfigError> {
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

/// Builds a `BootstrapConfig` from the bootstrap file, environment, and builder values.
#[derive(Debug, Default)]
pub struct BootstrapLoader {
    config_path: Option<PathBuf>,
    alc_path: Option<PathBuf>,
    load_pattern: Option<Vec<String>>,
}

impl BootstrapLoader {
    /// Create a new bootstrap loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the bootstrap file from `path` instead of the platform default.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the configuration root directory.
    pub fn with_alc_path(mut self, path: PathBuf) -> Self {
        self.alc_path = Some(path);
        self
    }

    /// Set the ordered load patterns.
    pub fn with_load_pattern(mut self, patterns: Vec<String>) -> Self {
        self.load_pattern = Some(patterns);
        self
    }

    /// Read overrides from `ALC_CONFIG` and `ALC_PATH`.
    ///
    /// Values already set through builder methods are kept.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub fn alc_path(&self) -> Option<&PathBuf> {
        self.alc_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_alc_path(&mut self, path: Option<PathBuf>) {
        self.alc_path = path;
    }

    /// Build the final bootstrap configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ConfigDirUnavailable` if no path was given and the
    ///   platform config directory cannot be determined.
    /// - `ConfigError::BootstrapRead` / `ConfigError::BootstrapParse` if the
    ///   bootstrap file is required but missing or malformed.
    /// - `ConfigError::MissingAlcPath` if no layer provides `alc_path`.
    pub fn build(self) -> Result<BootstrapConfig, ConfigError> {
        let file = self.read_file()?;

        let alc_path = self
            .alc_path
            .or(file.alc_path)
            .ok_or(ConfigError::MissingAlcPath)?;
        let load_pattern = self.load_pattern.or(file.load_pattern).unwrap_or_default();

        tracing::debug!(
            alc_path = %alc_path.display(),
            patterns = load_pattern.len(),
            "Bootstrap config loaded"
        );

        Ok(BootstrapConfig {
            alc_path,
            load_pattern,
        })
    }

    fn read_file(&self) -> Result<BootstrapFile, ConfigError> {
        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => match default_bootstrap_path() {
                Ok(path) => path,
                Err(_) if self.alc_path.is_some() => return Ok(BootstrapFile::default()),
                Err(e) => return Err(ConfigError::ConfigDirUnavailable(e.to_string())),
            },
        };

        if self.alc_path.is_some() && !path.exists() {
            tracing::debug!(
                path = %path.display(),
                "Bootstrap file not found, using alc_path override"
            );
            return Ok(BootstrapFile::default());
        }

        BootstrapFile::read(&path)
    }
}

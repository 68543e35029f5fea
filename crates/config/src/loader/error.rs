//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for bootstrap and per-tool layer failures.
//! - Carry the offending path (and entry index where relevant) for debugging.
//!
//! Does NOT handle:
//! - The "no configuration found" condition. That is a soft outcome reported
//!   through `LoadObserver`, never an error.
//! - A missing layer file. Missing layers are skipped by the merger.
//!
//! Invariants:
//! - Every file-related variant includes the path it refers to.
//! - A malformed layer aborts the whole load; no variant is ever swallowed.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading bootstrap or tool configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read bootstrap config at {path}")]
    BootstrapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse bootstrap config at {path}")]
    BootstrapParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("alc_path is required. Set ALC_PATH or add it to the bootstrap config.")]
    MissingAlcPath,

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Config file at {path} must contain a JSON object at the top level")]
    NotAMapping { path: PathBuf },

    #[error("The \"env\" key in {path} must be a list of [name, value] pairs")]
    InvalidEnvSection { path: PathBuf },

    #[error("Invalid env entry #{index} in {path}: expected a [name, value] pair of strings")]
    InvalidEnvEntry { path: PathBuf, index: usize },

    #[error("Merged configuration for '{tool}' does not match the requested type")]
    Deserialize {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

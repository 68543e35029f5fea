//! Environment variable overrides for the bootstrap configuration.
//!
//! Responsibilities:
//! - Read `ALC_CONFIG` and `ALC_PATH` and apply them to a `BootstrapLoader`.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Placeholder expansion inside load patterns (see `loader::resolve`).
//! - Reading the bootstrap file (see `builder.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Builder-provided values are never replaced by environment values.

use std::path::PathBuf;

use super::builder::BootstrapLoader;
use crate::constants::{ENV_ALC_PATH, ENV_BOOTSTRAP_PATH};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable overrides to the loader.
pub fn apply_env(loader: &mut BootstrapLoader) {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_BOOTSTRAP_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    if loader.alc_path().is_none()
        && let Some(root) = env_var_or_none(ENV_ALC_PATH)
    {
        loader.set_alc_path(Some(PathBuf::from(root)));
    }
}

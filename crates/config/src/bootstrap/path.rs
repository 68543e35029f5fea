//! Path helpers for the bootstrap configuration file.
//!
//! Responsibilities:
//! - Determine the platform-standard location of `config.json`.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - The `ALC_CONFIG` override (see `env.rs`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, BOOTSTRAP_FILE_NAME};

/// Returns the default path to the bootstrap configuration file.
///
/// - Linux: `~/.config/alchemy/config.json`
/// - macOS: `~/Library/Application Support/alchemy/config.json`
/// - Windows: `%AppData%\alchemy\config\config.json`
pub fn default_bootstrap_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(BOOTSTRAP_FILE_NAME))
}

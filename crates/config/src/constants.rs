//! Centralized constants for the Alchemy configuration engine.
//!
//! This module contains the file names, environment variable names, and
//! document keys shared by the bootstrap loader, resolver, and merger.

// =============================================================================
// File Naming
// =============================================================================

/// File name of the bootstrap configuration.
pub const BOOTSTRAP_FILE_NAME: &str = "config.json";

/// Application name used to derive the platform config directory.
pub const APP_NAME: &str = "alchemy";

/// Extension of every per-tool configuration layer.
pub const LAYER_EXTENSION: &str = "json";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the location of the bootstrap configuration file.
pub const ENV_BOOTSTRAP_PATH: &str = "ALC_CONFIG";

/// Overrides `alc_path`, the root directory holding every tool folder.
pub const ENV_ALC_PATH: &str = "ALC_PATH";

// =============================================================================
// Document Keys
// =============================================================================

/// Key holding `[name, value]` environment assignments inside a layer.
pub const ENV_KEY: &str = "env";

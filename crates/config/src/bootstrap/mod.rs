//! Bootstrap configuration loading.
//!
//! Responsibilities:
//! - Locate the bootstrap file (`ALC_CONFIG`, else the platform config directory).
//! - Layer builder values, environment overrides, and file values into a `BootstrapConfig`.
//!
//! Does NOT handle:
//! - Resolving or merging per-tool layers (see `loader` module).
//!
//! Invariants / Assumptions:
//! - The bootstrap config is read once and is read-only afterwards.
//! - `ALC_PATH` overrides the file's `alc_path`.

mod builder;
mod env;
mod path;


pub use builder::BootstrapLoader;
pub use env::env_var_or_none;
pub use path::default_bootstrap_path;

//! Layered configuration loading for Alchemy.
//!
//! A tool's configuration is assembled from `<alc_path>/<tool>/<tool>.json`
//! followed by every existing file named by the bootstrap `load_pattern`
//! list (e.g. `<tool>.all.json`, `<tool>.$SITE.json`, `<tool>.$USER.json`).
//! Later layers override earlier ones; object values are merged one level
//! deep instead of replaced.
//!
//! ```no_run
//! use alchemy_config::Alchemist;
//!
//! let alchemist = Alchemist::from_default_bootstrap()?;
//! let maya = alchemist.load("maya")?;
//! # Ok::<(), alchemy_config::ConfigError>(())
//! ```

mod bootstrap;
pub mod constants;
mod loader;
pub mod types;

pub use bootstrap::{BootstrapLoader, default_bootstrap_path, env_var_or_none};
pub use loader::{
    Alchemist, CandidatePath, ConfigError, ConfigMerger, EnvAssignment, EnvOverlay, LoadObserver,
    NoopObserver, PathResolver, TracingObserver, merge_document, merge_layers, read_document,
};
pub use types::{BootstrapConfig, EffectiveConfig, LayerOrigin, LayerSource};

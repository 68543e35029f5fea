//! Configuration type definitions for Alchemy.
//!
//! Responsibilities:
//! - Define the bootstrap settings that locate tool configuration.
//! - Define the merged result and its layer provenance.
//!
//! Does NOT handle:
//! - Loading or merging configuration (see `loader` module).
//! - Locating the bootstrap file (see `bootstrap` module).

mod bootstrap;
mod effective;

pub use bootstrap::BootstrapConfig;
pub use effective::{EffectiveConfig, LayerOrigin, LayerSource};

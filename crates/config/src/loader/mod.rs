//! Per-tool configuration loading.
//!
//! Responsibilities:
//! - Resolve the ordered layer paths of a tool (`resolve.rs`).
//! - Read and fold the layers with the one-level merge (`merge.rs`).
//! - Expose the `Alchemist` entry point, the observer hooks, and the env overlay.
//!
//! Does NOT handle:
//! - Locating or parsing the bootstrap file (see `bootstrap` module).
//! - Validating configuration contents against any schema.
//!
//! Invariants / Assumptions:
//! - Layer order is: base file first, then existing pattern layers in `load_pattern` order.
//! - Later layers override earlier ones; object values merge one level deep.
//! - A missing layer is skipped; a malformed one is a hard error.

mod alchemist;
mod error;
mod merge;
mod observer;
mod overlay;
mod resolve;

#[cfg(test)]
mod tests;

pub use alchemist::Alchemist;
pub use error::ConfigError;
pub use merge::{ConfigMerger, merge_document, merge_layers, read_document};
pub use observer::{LoadObserver, NoopObserver, TracingObserver};
pub use overlay::{EnvAssignment, EnvOverlay};
pub use resolve::{CandidatePath, PathResolver};

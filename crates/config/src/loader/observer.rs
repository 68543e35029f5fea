//! Observability hooks for a load pass.
//!
//! Components report through an injected `LoadObserver` instead of a global
//! logger. `NoopObserver` is the default; `TracingObserver` forwards to `tracing`.

use std::path::Path;

use crate::types::LayerSource;

/// Receives events from `Alchemist` while a tool's configuration is loaded.
///
/// All methods default to doing nothing.
pub trait LoadObserver: Send + Sync {
    /// No layer was read for `tool`; the caller receives an empty mapping.
    fn configuration_not_found(&self, _tool: &str) {}

    /// A layer was read and folded into the result.
    fn layer_loaded(&self, _tool: &str, _source: &LayerSource) {}

    /// A candidate layer did not exist on disk and was skipped.
    fn layer_missing(&self, _tool: &str, _path: &Path) {}
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl LoadObserver for NoopObserver {}

/// Observer that emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn configuration_not_found(&self, tool: &str) {
        tracing::warn!(tool, "No json config found for tool");
    }

    fn layer_loaded(&self, tool: &str, source: &LayerSource) {
        tracing::debug!(
            tool,
            path = %source.path.display(),
            rank = source.rank,
            "Config layer loaded"
        );
    }

    fn layer_missing(&self, tool: &str, path: &Path) {
        tracing::debug!(tool, path = %path.display(), "Config layer not found, skipping");
    }
}

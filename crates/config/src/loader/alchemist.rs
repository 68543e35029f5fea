//! The `Alchemist` entry point: resolve a tool's layers and merge them.
//!
//! Responsibilities:
//! - Compose `PathResolver` and `ConfigMerger` into a single `load` call.
//! - Report "no configuration found" through the injected observer.
//! - Provide typed loading and the environment overlay over the same layers.
//!
//! Does NOT handle:
//! - Applying the environment overlay to any process.
//! - Caching results between calls.
//!
//! Invariants / Assumptions:
//! - Each call builds its own candidate list and result; nothing is shared
//!   between calls except the read-only bootstrap config.
//! - `configuration_not_found` is reported exactly once for a call that reads no layer.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ConfigError;
use super::merge::{ConfigMerger, read_document};
use super::observer::{LoadObserver, NoopObserver};
use super::overlay::EnvOverlay;
use super::resolve::{CandidatePath, PathResolver};
use crate::bootstrap::BootstrapLoader;
use crate::types::{BootstrapConfig, EffectiveConfig};

/// Loads the effective configuration of a tool from its layers.
#[derive(Clone)]
pub struct Alchemist {
    resolver: PathResolver,
    merger: ConfigMerger,
    observer: Arc<dyn LoadObserver>,
}

impl std::fmt::Debug for Alchemist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alchemist")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl Alchemist {
    pub fn new(bootstrap: BootstrapConfig) -> Self {
        Self {
            resolver: PathResolver::new(bootstrap),
            merger: ConfigMerger::new(),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Build from the bootstrap file located through `ALC_CONFIG` or the
    /// platform config directory, with `ALC_PATH` applied.
    pub fn from_default_bootstrap() -> Result<Self, ConfigError> {
        let bootstrap = BootstrapLoader::new().from_env().build()?;
        Ok(Self::new(bootstrap))
    }

    /// Route load events to `observer` instead of discarding them.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.merger = self.merger.with_observer(Arc::clone(&observer));
        self.observer = observer;
        self
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Load the merged configuration of `tool`.
    ///
    /// Returns an empty mapping, and notifies the observer, when the tool has
    /// no configuration at all.
    ///
    /// # Errors
    ///
    /// Any layer that exists but cannot be read or parsed aborts the load.
    pub fn load(&self, tool: &str) -> Result<Map<String, Value>, ConfigError> {
        Ok(self.load_effective(tool)?.into_map())
    }

    /// Load the merged configuration together with the layers it came from.
    pub fn load_effective(&self, tool: &str) -> Result<EffectiveConfig, ConfigError> {
        let candidates = self.resolver.resolve(tool);
        self.merge_candidates(tool, &candidates)
    }

    /// Like `load_effective`, expanding pattern placeholders through `lookup`
    /// instead of the process environment.
    pub fn load_effective_with<F>(
        &self,
        tool: &str,
        lookup: F,
    ) -> Result<EffectiveConfig, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let candidates = self.resolver.resolve_with(tool, lookup);
        self.merge_candidates(tool, &candidates)
    }

    /// Load the merged configuration and deserialize it into `T`.
    pub fn load_as<T: DeserializeOwned>(&self, tool: &str) -> Result<T, ConfigError> {
        let map = self.load(tool)?;
        serde_json::from_value(Value::Object(map)).map_err(|e| ConfigError::Deserialize {
            tool: tool.to_string(),
            source: e,
        })
    }

    /// Collect the `env` assignments of every layer, in precedence order.
    pub fn env_overlay(&self, tool: &str) -> Result<EnvOverlay, ConfigError> {
        self.env_overlay_with(tool, |name| std::env::var(name).ok())
    }

    /// Like `env_overlay`, resolving placeholders through `lookup`.
    pub fn env_overlay_with<F>(
        &self,
        tool: &str,
        mut lookup: F,
    ) -> Result<EnvOverlay, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let candidates = self.resolver.resolve_with(tool, &mut lookup);
        let mut overlay = EnvOverlay::new();
        let mut layers_read = 0usize;

        for candidate in &candidates {
            let Some(document) = read_document(&candidate.path)? else {
                self.observer.layer_missing(tool, &candidate.path);
                continue;
            };
            layers_read += 1;
            overlay.extend_from_document(&candidate.path, &document, &mut lookup)?;
        }

        if layers_read == 0 {
            self.observer.configuration_not_found(tool);
        }
        Ok(overlay)
    }

    fn merge_candidates(
        &self,
        tool: &str,
        candidates: &[CandidatePath],
    ) -> Result<EffectiveConfig, ConfigError> {
        let effective = self.merger.merge(tool, candidates)?;
        if effective.is_empty_source() {
            self.observer.configuration_not_found(tool);
        }
        Ok(effective)
    }
}

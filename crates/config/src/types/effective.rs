//! Merged configuration with layer provenance.
//!
//! An `EffectiveConfig` is what one load pass produces: the merged mapping
//! plus the ordered list of layers that actually contributed to it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Where a candidate layer came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pattern", rename_all = "lowercase")]
pub enum LayerOrigin {
    /// The tool's own `<tool>.json`.
    Base,
    /// A `load_pattern` entry, kept unexpanded.
    Pattern(String),
}

/// A layer that was read and folded into the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSource {
    pub path: PathBuf,
    /// Position in the resolved sequence; higher ranks override lower ones.
    pub rank: usize,
    pub origin: LayerOrigin,
}

/// The merged configuration for one tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectiveConfig {
    pub config: Map<String, Value>,
    /// Contributing layers in precedence order.
    pub sources: Vec<LayerSource>,
}

impl EffectiveConfig {
    /// True when no layer was read, i.e. no configuration exists for the tool.
    pub fn is_empty_source(&self) -> bool {
        self.sources.is_empty()
    }

    /// Get a value by dot-separated path, e.g. `"render.engine"`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.config.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        Some(current)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Value::as_i64)
    }

    /// Discard provenance and keep the merged mapping.
    pub fn into_map(self) -> Map<String, Value> {
        self.config
    }
}

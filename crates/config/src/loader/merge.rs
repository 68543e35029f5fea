//! Layer reading and the two-tier merge.
//!
//! Responsibilities:
//! - Read each candidate layer as a JSON object.
//! - Fold layers in order: last writer wins per top-level key, except that
//!   two object values under the same key are merged one level deep.
//!
//! Does NOT handle:
//! - Deciding which layers exist (see resolve.rs).
//! - Surfacing "no configuration found" to the user (see alchemist.rs).
//!
//! Invariants:
//! - Merge depth is exactly one: an object nested inside a merged object is
//!   replaced wholesale.
//! - A missing layer file is skipped; an unreadable or malformed one aborts
//!   the merge and nothing from it is applied.
//! - The result holds no reference to any layer after the merge returns.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::error::ConfigError;
use super::observer::{LoadObserver, NoopObserver};
use super::resolve::CandidatePath;
use crate::types::{EffectiveConfig, LayerSource};

/// Fold one document into the accumulated result.
///
/// Objects present on both sides are merged key by key with `document`
/// winning; every other value replaces the existing entry outright.
pub fn merge_document(result: &mut Map<String, Value>, document: Map<String, Value>) {
    for (key, value) in document {
        if let Value::Object(incoming) = value {
            if let Some(Value::Object(existing)) = result.get_mut(&key) {
                existing.extend(incoming);
                continue;
            }
            result.insert(key, Value::Object(incoming));
        } else {
            result.insert(key, value);
        }
    }
}

/// Merge in-memory documents in order (first is base, last has highest precedence).
pub fn merge_layers<I>(documents: I) -> Map<String, Value>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    documents.into_iter().fold(Map::new(), |mut result, document| {
        merge_document(&mut result, document);
        result
    })
}

/// Read one layer from disk.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_document(path: &Path) -> Result<Option<Map<String, Value>>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let value: Value = serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads candidate layers and folds them into one mapping.
#[derive(Clone)]
pub struct ConfigMerger {
    observer: Arc<dyn LoadObserver>,
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigMerger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigMerger").finish_non_exhaustive()
    }
}

impl ConfigMerger {
    pub fn new() -> Self {
        Self {
            observer: Arc::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Merge `candidates` in order.
    ///
    /// An empty input, or one where no candidate exists, yields an empty
    /// result with no sources; check `EffectiveConfig::is_empty_source`.
    pub fn merge(
        &self,
        tool: &str,
        candidates: &[CandidatePath],
    ) -> Result<EffectiveConfig, ConfigError> {
        let mut effective = EffectiveConfig::default();

        for candidate in candidates {
            let Some(document) = read_document(&candidate.path)? else {
                self.observer.layer_missing(tool, &candidate.path);
                continue;
            };

            merge_document(&mut effective.config, document);

            let source = LayerSource {
                path: candidate.path.clone(),
                rank: candidate.rank,
                origin: candidate.origin.clone(),
            };
            self.observer.layer_loaded(tool, &source);
            effective.sources.push(source);
        }

        Ok(effective)
    }
}

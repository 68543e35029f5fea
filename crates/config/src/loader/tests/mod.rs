//! Tests for the `Alchemist` entry point.
//!
//! Responsibilities:
//! - Test end-to-end resolution + merge against layer folders on disk.
//! - Test observer notifications and the env overlay over real layers.
//!
//! Does NOT handle:
//! - The merge step in isolation (tested in merge.rs).
//! - Placeholder expansion details (tested in resolve.rs).
//!
//! Invariants:
//! - Tests that read the process environment use `serial_test` and `temp_env`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use crate::loader::LoadObserver;
use crate::types::LayerSource;


/// Write `<root>/<tool>/<file_name>` with `content`.
pub fn write_layer(root: &Path, tool: &str, file_name: &str, content: &Value) -> PathBuf {
    let folder = root.join(tool);
    fs::create_dir_all(&folder).unwrap();
    let path = folder.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(content).unwrap()).unwrap();
    path
}

/// Events captured by `RecordingObserver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    NotFound(String),
    Loaded(PathBuf),
    Missing(PathBuf),
}

/// Observer that records every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Event>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn not_found_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::NotFound(_)))
            .count()
    }
}

impl LoadObserver for RecordingObserver {
    fn configuration_not_found(&self, tool: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::NotFound(tool.to_string()));
    }

    fn layer_loaded(&self, _tool: &str, source: &LayerSource) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Loaded(source.path.clone()));
    }

    fn layer_missing(&self, _tool: &str, path: &Path) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Missing(path.to_path_buf()));
    }
}

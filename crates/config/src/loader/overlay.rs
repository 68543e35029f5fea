//! Environment overlay built from the `env` key of each layer.
//!
//! Responsibilities:
//! - Collect `[name, value]` assignments from every layer in precedence order.
//! - Expand placeholders in each value against earlier assignments, then the
//!   process environment.
//!
//! Does NOT handle:
//! - Mutating the process environment. The caller applies the overlay, e.g.
//!   to a child `Command`.
//!
//! Invariants:
//! - Assignments keep layer order, then entry order within a layer.
//! - Every `/` in an expanded value is replaced by the platform separator.

use std::collections::HashMap;
use std::path::{MAIN_SEPARATOR, Path};
use std::process::Command;

use serde_json::{Map, Value};

use super::error::ConfigError;
use super::resolve::expand_placeholders;
use crate::constants::ENV_KEY;

/// One `NAME=value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    pub name: String,
    pub value: String,
}

/// Ordered environment assignments for a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverlay {
    assignments: Vec<EnvAssignment>,
}

impl EnvOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// All assignments in the order they should be applied.
    pub fn assignments(&self) -> &[EnvAssignment] {
        &self.assignments
    }

    /// Effective value of `name`; the last assignment wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.assignments
            .iter()
            .rev()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Set every assignment on `command`, in order.
    pub fn apply_to(&self, command: &mut Command) {
        for assignment in &self.assignments {
            command.env(&assignment.name, &assignment.value);
        }
    }

    /// Append the `env` entries of one layer, expanding values with `lookup`
    /// for names not yet assigned by the overlay.
    pub(crate) fn extend_from_document<F>(
        &mut self,
        path: &Path,
        document: &Map<String, Value>,
        mut lookup: F,
    ) -> Result<(), ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let Some(section) = document.get(ENV_KEY) else {
            return Ok(());
        };
        let entries = section.as_array().ok_or_else(|| ConfigError::InvalidEnvSection {
            path: path.to_path_buf(),
        })?;

        for (index, entry) in entries.iter().enumerate() {
            let (name, raw) = parse_entry(entry).ok_or_else(|| ConfigError::InvalidEnvEntry {
                path: path.to_path_buf(),
                index,
            })?;

            let value = {
                let current = self.current_values();
                let expanded = expand_placeholders(raw, |var| {
                    current.get(var).map(|v| v.to_string()).or_else(|| lookup(var))
                });
                expanded.replace('/', &MAIN_SEPARATOR.to_string())
            };

            self.assignments.push(EnvAssignment {
                name: name.to_string(),
                value,
            });
        }

        Ok(())
    }

    fn current_values(&self) -> HashMap<&str, &str> {
        self.assignments
            .iter()
            .map(|a| (a.name.as_str(), a.value.as_str()))
            .collect()
    }
}

fn parse_entry(entry: &Value) -> Option<(&str, &str)> {
    match entry.as_array()?.as_slice() {
        [Value::String(name), Value::String(value)] => Some((name.as_str(), value.as_str())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn document(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn sep(s: &str) -> String {
        s.replace('/', &MAIN_SEPARATOR.to_string())
    }

    #[test]
    fn test_document_without_env_key() {
        let mut overlay = EnvOverlay::new();
        overlay
            .extend_from_document(Path::new("a.json"), &document(json!({"x": 1})), |_| None)
            .unwrap();
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_values_expanded_and_separators_normalized() {
        let mut overlay = EnvOverlay::new();
        let doc = document(json!({
            "env": [["TOOL_ROOT", "$STUDIO/tools/maya"], ["TOOL_MODE", "batch"]]
        }));
        overlay
            .extend_from_document(Path::new("maya.json"), &doc, |var| {
                (var == "STUDIO").then(|| "/studio".to_string())
            })
            .unwrap();

        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.get("TOOL_ROOT"), Some(sep("/studio/tools/maya").as_str()));
        assert_eq!(overlay.get("TOOL_MODE"), Some("batch"));
    }

    #[test]
    fn test_later_entries_see_earlier_assignments() {
        let mut overlay = EnvOverlay::new();
        let base = document(json!({"env": [["ROOT", "base"]]}));
        let site = document(json!({"env": [["ROOT", "site"], ["CACHE", "${ROOT}_cache"]]}));

        overlay
            .extend_from_document(Path::new("a.json"), &base, |_| None)
            .unwrap();
        overlay
            .extend_from_document(Path::new("b.json"), &site, |var| {
                (var == "ROOT").then(|| "process".to_string())
            })
            .unwrap();

        assert_eq!(overlay.get("ROOT"), Some("site"));
        assert_eq!(overlay.get("CACHE"), Some("site_cache"));
        assert_eq!(overlay.assignments().len(), 3);
        assert_eq!(overlay.assignments()[0].value, "base");
    }

    #[test]
    fn test_unknown_variable_left_verbatim() {
        let mut overlay = EnvOverlay::new();
        let doc = document(json!({"env": [["X", "$UNSET_THING"]]}));
        overlay
            .extend_from_document(Path::new("a.json"), &doc, |_| None)
            .unwrap();
        assert_eq!(overlay.get("X"), Some("$UNSET_THING"));
    }

    #[test]
    fn test_invalid_section_rejected() {
        let mut overlay = EnvOverlay::new();
        let doc = document(json!({"env": {"NAME": "value"}}));
        let err = overlay
            .extend_from_document(Path::new("a.json"), &doc, |_| None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvSection { .. }));
    }

    #[test]
    fn test_invalid_entry_reports_index() {
        let mut overlay = EnvOverlay::new();
        let doc = document(json!({"env": [["OK", "1"], ["BROKEN"], ["N", 3]]}));
        let err = overlay
            .extend_from_document(Path::new("a.json"), &doc, |_| None)
            .unwrap_err();
        match err {
            ConfigError::InvalidEnvEntry { path, index } => {
                assert_eq!(path, PathBuf::from("a.json"));
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_apply_to_command() {
        let mut overlay = EnvOverlay::new();
        let doc = document(json!({"env": [["ALC_TEST_A", "1"], ["ALC_TEST_B", "2"]]}));
        overlay
            .extend_from_document(Path::new("a.json"), &doc, |_| None)
            .unwrap();

        let mut command = Command::new("true");
        overlay.apply_to(&mut command);
        let envs: Vec<_> = command
            .get_envs()
            .map(|(k, v)| (k.to_owned(), v.map(|v| v.to_owned())))
            .collect();
        assert_eq!(envs.len(), 2);
        assert!(envs.contains(&("ALC_TEST_A".into(), Some("1".into()))));
        assert!(envs.contains(&("ALC_TEST_B".into(), Some("2".into()))));
    }
}

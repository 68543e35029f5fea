//! Candidate layer resolution for a tool.
//!
//! Responsibilities:
//! - Derive the tool folder (`<alc_path>/<tool>`) and its base file (`<tool>.json`).
//! - Expand environment placeholders in each load pattern and keep the
//!   pattern-derived paths that exist.
//!
//! Does NOT handle:
//! - Reading or parsing layer files (see merge.rs).
//!
//! Invariants:
//! - The base file is always the first candidate, whether or not it exists.
//! - Pattern-derived candidates follow in `load_pattern` order and exist at
//!   resolution time.
//! - Unresolved placeholders are left verbatim in the expanded pattern.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::constants::LAYER_EXTENSION;
use crate::types::{BootstrapConfig, LayerOrigin};

/// A layer path with its precedence rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    pub path: PathBuf,
    /// Position in the resolved sequence. Later ranks override earlier ones.
    pub rank: usize,
    pub origin: LayerOrigin,
}

/// Computes the ordered layer paths for a tool.
#[derive(Debug, Clone)]
pub struct PathResolver {
    bootstrap: BootstrapConfig,
}

impl PathResolver {
    pub fn new(bootstrap: BootstrapConfig) -> Self {
        Self { bootstrap }
    }

    pub fn bootstrap(&self) -> &BootstrapConfig {
        &self.bootstrap
    }

    /// `<alc_path>/<tool>`
    pub fn tool_folder(&self, tool: &str) -> PathBuf {
        self.bootstrap.alc_path.join(tool)
    }

    /// `<alc_path>/<tool>/<tool>.json`
    pub fn base_file(&self, tool: &str) -> PathBuf {
        self.tool_folder(tool).join(format!("{tool}.{LAYER_EXTENSION}"))
    }

    /// Resolve candidates, expanding placeholders from the process environment.
    pub fn resolve(&self, tool: &str) -> Vec<CandidatePath> {
        self.resolve_with(tool, |name| std::env::var(name).ok())
    }

    /// Resolve candidates, expanding placeholders through `lookup`.
    pub fn resolve_with<F>(&self, tool: &str, mut lookup: F) -> Vec<CandidatePath>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let folder = self.tool_folder(tool);
        let mut candidates = vec![CandidatePath {
            path: self.base_file(tool),
            rank: 0,
            origin: LayerOrigin::Base,
        }];

        for pattern in &self.bootstrap.load_pattern {
            let expanded = expand_placeholders(pattern, &mut lookup);
            let path = folder.join(expanded.as_ref());
            if !path.exists() {
                tracing::trace!(
                    tool,
                    pattern = %pattern,
                    path = %path.display(),
                    "Pattern layer absent"
                );
                continue;
            }
            candidates.push(CandidatePath {
                path,
                rank: candidates.len(),
                origin: LayerOrigin::Pattern(pattern.clone()),
            });
        }

        candidates
    }
}

/// Expand `$VAR` and `${VAR}` placeholders, leaving unknown variables untouched.
pub(crate) fn expand_placeholders<F>(input: &str, lookup: F) -> Cow<'_, str>
where
    F: FnMut(&str) -> Option<String>,
{
    shellexpand::env_with_context_no_errors(input, lookup)
}

//! Availability checking.
//!
//! A tool with command names is satisfied when ANY of them resolves to an
//! executable on the search path; the first match wins and no further
//! checks run. Pure libraries (no command names) delegate to a pluggable
//! [`LibraryProbe`]: the core defines only the yes/no contract, not the
//! mechanism.

use crate::managers::probe::{parse_system_path, resolve_tool_path};
use crate::registry::ToolSpec;
use std::path::PathBuf;

/// Presence check for tools with no invocable binary.
///
/// Supplied by the embedding application (e.g. dlopen, pkg-config, a
/// filesystem convention). Without one, library tools report unsatisfied.
pub trait LibraryProbe {
    fn is_present(&self, spec: &ToolSpec) -> bool;
}

/// Checks whether tool specifications are satisfied on the host.
///
/// Stateless between calls: every check re-reads the filesystem, so an
/// install that lands a binary is visible to the very next check.
pub struct Checker<'a> {
    path_entries: Vec<PathBuf>,
    library_probe: Option<&'a dyn LibraryProbe>,
}

impl<'a> Checker<'a> {
    /// Checker over the process's current PATH.
    pub fn from_env() -> Self {
        Self {
            path_entries: parse_system_path(),
            library_probe: None,
        }
    }

    /// Checker over explicit path entries (test seam and custom embeddings).
    pub fn with_path_entries(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            library_probe: None,
        }
    }

    /// Attach a library probe for command-less tools.
    pub fn with_library_probe(mut self, probe: &'a dyn LibraryProbe) -> Self {
        self.library_probe = Some(probe);
        self
    }

    /// Resolve the first of the tool's command names found on the path.
    pub fn locate(&self, spec: &ToolSpec) -> Option<PathBuf> {
        spec.command_names()
            .iter()
            .find_map(|name| resolve_tool_path(name, &self.path_entries))
    }

    /// Whether any presence check exists for this tool.
    ///
    /// False only for a library tool with no attached [`LibraryProbe`]:
    /// there is nothing to look up on the search path and no other
    /// mechanism to ask.
    pub fn can_verify(&self, spec: &ToolSpec) -> bool {
        !spec.is_library() || self.library_probe.is_some()
    }

    /// Whether the tool is satisfied on this host.
    pub fn is_satisfied(&self, spec: &ToolSpec) -> bool {
        if spec.is_library() {
            return match self.library_probe {
                Some(probe) => probe.is_present(spec),
                None => {
                    tracing::debug!(
                        tool = %spec.name,
                        "library tool with no library probe; reporting unsatisfied"
                    );
                    false
                }
            };
        }
        self.locate(spec).is_some()
    }
}

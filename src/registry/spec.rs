//! Tool specification data model.
//!
//! A [`ToolSpec`] is one logical external dependency: our name for it, the
//! executable names that satisfy it, and how to install it per package
//! manager. The registry file format maps tool names to [`ToolRecord`]s;
//! a spec is a record joined with its name.

use crate::managers::PackageManagerId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The serialized form of one registry entry.
///
/// `install_names` is keyed by [`PackageManagerId`], so an unsupported
/// manager identifier in a registry file is rejected during
/// deserialization rather than silently carried along.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolRecord {
    /// Alternative executable names that all satisfy this dependency,
    /// in check order. Empty for pure libraries.
    #[serde(default)]
    pub command_names: Vec<String>,

    /// Per-manager package identifier. Absence of a key means "not
    /// installable via that manager".
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub install_names: BTreeMap<PackageManagerId, String>,

    /// Classification tags for selecting subsets of the registry.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,

    /// Free-text human guidance. No behavioral effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// One named tool specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: String,
    pub record: ToolRecord,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, record: ToolRecord) -> Self {
        Self {
            name: name.into(),
            record,
        }
    }

    /// Alternative executable names, in check order.
    pub fn command_names(&self) -> &[String] {
        &self.record.command_names
    }

    /// A pure library: no invocable binary, presence checked externally.
    pub fn is_library(&self) -> bool {
        self.record.command_names.is_empty()
    }

    /// The package identifier for a manager, if this tool is installable
    /// through it.
    pub fn install_name(&self, manager: PackageManagerId) -> Option<&str> {
        self.record.install_names.get(&manager).map(String::as_str)
    }

    /// Managers that can install this tool, in no particular order.
    pub fn providers(&self) -> impl Iterator<Item = PackageManagerId> + '_ {
        self.record.install_names.keys().copied()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.record.tags.contains(tag)
    }
}

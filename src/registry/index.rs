//! Queryable view over the loaded tool registry.
//!
//! The index is an immutable snapshot: entries are fixed at construction
//! and lookups are total over that set. Iteration order is name order.

use crate::registry::spec::ToolSpec;
use std::collections::BTreeMap;

/// Immutable, queryable registry of tool specifications.
#[derive(Debug, Clone, Default)]
pub struct RegistryIndex {
    tools: BTreeMap<String, ToolSpec>,
}

impl RegistryIndex {
    /// Build an index from specs. Later duplicates override earlier ones,
    /// which is how a user registry overlays the built-in defaults.
    pub fn from_specs(specs: impl IntoIterator<Item = ToolSpec>) -> Self {
        let tools = specs
            .into_iter()
            .map(|spec| (spec.name.clone(), spec))
            .collect();
        Self { tools }
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    /// All tools carrying a tag, in name order.
    pub fn by_tag(&self, tag: &str) -> Vec<&ToolSpec> {
        self.tools.values().filter(|s| s.has_tag(tag)).collect()
    }

    /// All known tool names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// All specs, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

//! Registry loading and validation.
//!
//! The registry format is a YAML mapping from tool name to record (see
//! [`ToolRecord`]). A curated default registry is embedded in the binary;
//! a user-supplied file overlays it, overriding entries of the same name.

use crate::error::{OutfitterError, Result};
use crate::registry::index::RegistryIndex;
use crate::registry::spec::{ToolRecord, ToolSpec};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The embedded default registry.
const DEFAULT_REGISTRY: &str = include_str!("data/tools.yml");

/// Tag required on entries with no command names.
const LIBRARY_TAG: &str = "library";

/// Load the embedded default registry.
pub fn load_default() -> Result<RegistryIndex> {
    let specs = parse_registry(DEFAULT_REGISTRY, Path::new("<builtin>"))?;
    Ok(RegistryIndex::from_specs(specs))
}

/// Load the default registry with an optional user overlay file.
pub fn load(user_registry: Option<&Path>) -> Result<RegistryIndex> {
    let mut specs = parse_registry(DEFAULT_REGISTRY, Path::new("<builtin>"))?;
    if let Some(path) = user_registry {
        let text = std::fs::read_to_string(path).map_err(|e| OutfitterError::RegistryLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        specs.extend(parse_registry(&text, path)?);
        tracing::debug!(path = %path.display(), "loaded user registry overlay");
    }
    Ok(RegistryIndex::from_specs(specs))
}

/// Name/record pairs of one document, in document order.
///
/// Deserialized pair by pair instead of into a map so that a name
/// repeated within one document survives to be rejected, not silently
/// collapsed into whichever entry came last.
struct RegistryDocument(Vec<(String, ToolRecord)>);

impl<'de> serde::Deserialize<'de> for RegistryDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> serde::de::Visitor<'de> for DocumentVisitor {
            type Value = RegistryDocument;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a mapping from tool name to record")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, ToolRecord>()? {
                    entries.push(entry);
                }
                Ok(RegistryDocument(entries))
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

/// Parse one registry document into specs, validating the library contract
/// and rejecting duplicate names.
pub fn parse_registry(text: &str, origin: &Path) -> Result<Vec<ToolSpec>> {
    let document: RegistryDocument =
        serde_yaml::from_str(text).map_err(|e| OutfitterError::RegistryLoad {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut seen = BTreeSet::new();
    let mut specs = Vec::with_capacity(document.0.len());
    for (name, record) in document.0 {
        if !seen.insert(name.clone()) {
            return Err(OutfitterError::RegistryLoad {
                path: origin.to_path_buf(),
                message: format!("duplicate entry '{name}'"),
            });
        }
        if record.command_names.is_empty()
            && !record.tags.contains(LIBRARY_TAG)
            && !record.install_names.is_empty()
        {
            return Err(OutfitterError::RegistryLoad {
                path: origin.to_path_buf(),
                message: format!(
                    "tool '{name}' has no command_names; add the '{LIBRARY_TAG}' tag \
                     if it is a library"
                ),
            });
        }
        specs.push(ToolSpec::new(name, record));
    }
    Ok(specs)
}

/// Resolve the registry path from a CLI flag or the default lookup.
///
/// With no flag, `outfitter.yml` in the current directory is used when
/// present, mirroring per-project registries.
pub fn resolve_registry_path(flag: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = flag {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from("outfitter.yml");
    local.is_file().then_some(local)
}

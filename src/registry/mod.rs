//! Tool registry: data model, loading, and the queryable index.
//!
//! # Modules
//!
//! - [`spec`] - `ToolSpec`/`ToolRecord` data model
//! - [`index`] - Immutable queryable snapshot
//! - [`loader`] - YAML parsing, embedded defaults, user overlay

pub mod index;
pub mod loader;
pub mod spec;

pub use index::RegistryIndex;
pub use loader::{load, load_default, parse_registry, resolve_registry_path};
pub use spec::{ToolRecord, ToolSpec};

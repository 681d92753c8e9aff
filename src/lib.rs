//! Outfitter - External CLI tool dependency resolution and installation.
//!
//! Outfitter answers two questions about a project's external tool
//! dependencies: which of them are present on this host, and how can the
//! missing ones be installed through the package managers actually
//! available here.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - Availability checking, plan resolution, and execution
//! - [`error`] - Error types and result aliases
//! - [`managers`] - Package manager definitions, probing, and invocation
//! - [`registry`] - Tool registry loading and lookup
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output, theming, and progress
//!
//! # Example
//!
//! ```
//! use outfitter::engine::{Checker, Engine, Selection};
//! use outfitter::managers::{HostCapabilities, PackageManagerId, Platform};
//! use outfitter::registry;
//!
//! let index = registry::load_default().unwrap();
//! // A synthetic host keeps this deterministic; use HostProbe for real hosts.
//! let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
//! let engine = Engine::new(&index, host);
//! let reports = engine.check_only(&Selection::names(["ripgrep"]));
//! assert_eq!(reports.len(), 1);
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod managers;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{OutfitterError, Result};

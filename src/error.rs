//! Error types for outfitter operations.
//!
//! This module defines [`OutfitterError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Per-tool failures (unknown tool, no provider, install/verify failure)
//!   surface as outcomes in the run report, never as process aborts.
//! - `OutfitterError` is reserved for conditions that stop an operation:
//!   a registry that cannot be loaded, a command that cannot be spawned.
//! - Use `anyhow::Error` (via `OutfitterError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::managers::PackageManagerId;

/// Core error type for outfitter operations.
#[derive(Debug, Error)]
pub enum OutfitterError {
    /// Registry file not found or unreadable.
    #[error("Failed to load registry at {path}: {message}")]
    RegistryLoad { path: PathBuf, message: String },

    /// Requested tool name is not in the registry.
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Known tool, but no available package manager lists it.
    #[error("No available package manager provides '{tool}'")]
    NoProvider { tool: String },

    /// A package manager signaled failure during install.
    #[error("{manager} failed to install '{tool}': {message}")]
    InstallFailed {
        tool: String,
        manager: PackageManagerId,
        message: String,
    },

    /// Install reported success but the tool still does not resolve.
    #[error("{manager} reported success but '{tool}' is still not available")]
    VerifyFailed {
        tool: String,
        manager: PackageManagerId,
    },

    /// Shell command could not be run at all.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for outfitter operations.
pub type Result<T> = std::result::Result<T, OutfitterError>;

//! Per-tool outcome types.
//!
//! Every requested tool ends a run with exactly one [`ToolOutcome`].
//! Outcomes are created fresh per run and never persisted; the engine
//! re-probes the host on every invocation.

use crate::managers::PackageManagerId;
use serde::Serialize;
use std::path::PathBuf;

/// The result of resolving (and possibly installing) a single tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToolOutcome {
    /// The tool was already present; no action taken.
    AlreadySatisfied {
        /// Resolved binary path, when the tool has one.
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<PathBuf>,
    },

    /// Missing, but installable. Check-only runs stop here; install runs
    /// continue to `Installed`/`InstallFailed`/`VerifyFailed`.
    Missing { installable_via: PackageManagerId },

    /// Installed during this run and verified present afterwards.
    Installed { manager: PackageManagerId },

    /// The requested name is not in the registry.
    UnknownTool,

    /// In the registry, but no available manager on this host covers it.
    NoProvider,

    /// The chosen manager signaled failure.
    InstallFailed {
        manager: PackageManagerId,
        detail: String,
    },

    /// The manager signaled success but the tool still does not resolve.
    VerifyFailed { manager: PackageManagerId },
}

impl ToolOutcome {
    /// Whether this outcome means the tool is usable now.
    pub fn is_satisfied(&self) -> bool {
        matches!(
            self,
            ToolOutcome::AlreadySatisfied { .. } | ToolOutcome::Installed { .. }
        )
    }

    /// Whether this outcome represents a failure the operator must act on.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ToolOutcome::UnknownTool
                | ToolOutcome::NoProvider
                | ToolOutcome::InstallFailed { .. }
                | ToolOutcome::VerifyFailed { .. }
        )
    }

    /// Short machine-friendly label, used in logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ToolOutcome::AlreadySatisfied { .. } => "already_satisfied",
            ToolOutcome::Missing { .. } => "missing",
            ToolOutcome::Installed { .. } => "installed",
            ToolOutcome::UnknownTool => "unknown_tool",
            ToolOutcome::NoProvider => "no_provider",
            ToolOutcome::InstallFailed { .. } => "install_failed",
            ToolOutcome::VerifyFailed { .. } => "verify_failed",
        }
    }
}

/// One tool's outcome within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolReport {
    pub tool: String,
    #[serde(flatten)]
    pub outcome: ToolOutcome,
}

impl ToolReport {
    pub fn new(tool: impl Into<String>, outcome: ToolOutcome) -> Self {
        Self {
            tool: tool.into(),
            outcome,
        }
    }

    /// Convert a failure outcome into its corresponding error, for callers
    /// that want to `?` on a single tool instead of inspecting reports.
    pub fn into_result(self) -> crate::error::Result<()> {
        use crate::error::OutfitterError;
        match self.outcome {
            ToolOutcome::UnknownTool => Err(OutfitterError::UnknownTool { name: self.tool }),
            ToolOutcome::NoProvider => Err(OutfitterError::NoProvider { tool: self.tool }),
            ToolOutcome::InstallFailed { manager, detail } => Err(OutfitterError::InstallFailed {
                tool: self.tool,
                manager,
                message: detail,
            }),
            ToolOutcome::VerifyFailed { manager } => Err(OutfitterError::VerifyFailed {
                tool: self.tool,
                manager,
            }),
            _ => Ok(()),
        }
    }
}

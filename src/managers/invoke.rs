//! The package manager invocation contract.
//!
//! The engine never shells out to a manager directly; it goes through
//! [`ManagerInvoker`], which models a manager as exactly two operations:
//! `probe` and `install`. The resolver and the test suite substitute
//! deterministic fakes behind the same trait.

use crate::managers::defs::PackageManagerId;
use crate::shell::command::{execute, execute_check, CommandOptions};
use std::time::Duration;

/// Result of one install invocation.
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// The invocation's own success signal (exit status). Authoritative;
    /// output text is never interpreted.
    pub success: bool,
    /// Human-readable detail for reporting (exit code, stderr tail).
    pub detail: String,
}

impl InstallResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            detail: String::new(),
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: detail.into(),
        }
    }
}

/// Abstract contract for invoking a package manager.
pub trait ManagerInvoker {
    /// Whether the manager responds to a trivial no-op invocation.
    fn probe(&self, id: PackageManagerId) -> bool;

    /// Install one package identifier through the manager.
    fn install(&self, id: PackageManagerId, package: &str) -> InstallResult;
}

/// Real invoker: runs each manager's actual command line through the shell.
#[derive(Debug, Clone)]
pub struct ShellInvoker {
    /// Timeout applied to probe invocations. Installs run to completion.
    probe_timeout: Duration,
}

impl Default for ShellInvoker {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellInvoker {
    pub fn new() -> Self {
        Self {
            probe_timeout: crate::managers::probe::DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_probe_timeout(probe_timeout: Duration) -> Self {
        Self { probe_timeout }
    }
}

impl ManagerInvoker for ShellInvoker {
    fn probe(&self, id: PackageManagerId) -> bool {
        execute_check(id.def().version_command, Some(self.probe_timeout))
    }

    fn install(&self, id: PackageManagerId, package: &str) -> InstallResult {
        let command = id.def().install_command(package);
        tracing::info!(manager = %id, package, %command, "installing");

        match execute(&command, &CommandOptions::default()) {
            Ok(result) if result.success => InstallResult::ok(),
            Ok(result) => {
                let stderr_tail = result
                    .stderr
                    .lines()
                    .rev()
                    .find(|l| !l.trim().is_empty())
                    .unwrap_or("")
                    .to_string();
                let detail = match result.exit_code {
                    Some(code) if stderr_tail.is_empty() => format!("exit code {code}"),
                    Some(code) => format!("exit code {code}: {stderr_tail}"),
                    None => "terminated by signal".to_string(),
                };
                InstallResult::failed(detail)
            }
            Err(e) => InstallResult::failed(e.to_string()),
        }
    }
}

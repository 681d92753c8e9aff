//! Shell command execution.

pub mod command;

pub use command::{execute, execute_check, CommandOptions, CommandResult};

/// Check whether we are running in a CI environment.
///
/// Most CI providers set `CI=true`; GitHub Actions additionally sets
/// `GITHUB_ACTIONS`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok_and(|v| !v.is_empty() && v != "false")
        || std::env::var("GITHUB_ACTIONS").is_ok()
}

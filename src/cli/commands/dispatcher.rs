//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] with the shared environment commands run in
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::Path;
use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::engine::Engine;
use crate::error::Result;
use crate::managers::{HostCapabilities, HostProbe};
use crate::registry::{self, RegistryIndex};
use crate::ui::{Output, Theme};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting success/failure and exit code.
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Shared environment for command execution.
pub struct CommandContext {
    pub output: Output,
    pub theme: Theme,
    /// Registry file given on the command line, if any.
    pub registry_path: Option<std::path::PathBuf>,
    pub probe_timeout: Duration,
    /// Whether prompting the user is allowed.
    pub interactive: bool,
}

impl CommandContext {
    /// Load the effective registry: built-in entries merged with the user
    /// registry from `--registry` or `./outfitter.yml`.
    pub fn load_registry(&self) -> Result<RegistryIndex> {
        let path = registry::resolve_registry_path(self.registry_path.as_deref());
        registry::load(path.as_deref())
    }

    /// Probe the host for usable package managers.
    pub fn probe_host(&self) -> HostCapabilities {
        HostProbe::with_timeout(self.probe_timeout).detect()
    }

    /// Build an engine over a registry and freshly probed host.
    pub fn engine<'a>(&self, registry: &'a RegistryIndex) -> Engine<'a> {
        Engine::new(registry, self.probe_host())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    ctx: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the given context.
    pub fn new(ctx: CommandContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::Info(args)) => {
                let cmd = super::info::InfoCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::Managers(args)) => {
                let cmd = super::managers::ManagersCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(&self.ctx)
            }
            None => {
                // Default to a full check
                let cmd = super::check::CheckCommand::new(crate::cli::args::CheckArgs::default());
                cmd.execute(&self.ctx)
            }
        }
    }
}

/// Context with sane defaults for direct use in tests.
pub fn test_context(registry_path: Option<&Path>) -> CommandContext {
    CommandContext {
        output: Output::new(crate::ui::OutputMode::Quiet),
        theme: Theme::plain(),
        registry_path: registry_path.map(Path::to_path_buf),
        probe_timeout: Duration::from_secs(1),
        interactive: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn context_loads_builtin_registry() {
        let ctx = test_context(None);
        let registry = ctx.load_registry().unwrap();
        assert!(registry.lookup("ripgrep").is_some());
    }
}

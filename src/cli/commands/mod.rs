//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`outfitter check`, `outfitter install`)
//! - Shared registry loading and host probing in [`CommandContext`]
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod info;
pub mod install;
pub mod managers;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};

//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Outfitter - External CLI tool dependency resolution and installation.
#[derive(Debug, Parser)]
#[command(name = "outfitter")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a tool registry file (merged over the built-in registry)
    #[arg(short, long, global = true)]
    pub registry: Option<PathBuf>,

    /// Per-probe timeout in seconds when detecting package managers
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check which tools are present, without installing (default)
    Check(CheckArgs),

    /// Install missing tools through detected package managers
    Install(InstallArgs),

    /// Show everything the registry knows about one tool
    Info(InfoArgs),

    /// List package managers detected on this host
    Managers(ManagersArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Tools to check; all registry tools when empty
    pub tools: Vec<String>,

    /// Also check tools carrying these registry tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tag: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Tools to install
    pub tools: Vec<String>,

    /// Also install tools carrying these registry tags (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tag: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Show the installation plan without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InfoArgs {
    /// Registry names of tools; the whole registry when empty
    pub tools: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `managers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ManagersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

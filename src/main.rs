//! Outfitter CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use outfitter::cli::{Cli, CommandContext, CommandDispatcher};
use outfitter::managers::probe::DEFAULT_PROBE_TIMEOUT;
use outfitter::shell::is_ci;
use outfitter::ui::{Output, OutputMode, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("outfitter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outfitter=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("outfitter starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let theme = Theme::detect();
    let probe_timeout = cli
        .timeout
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_PROBE_TIMEOUT);

    let ctx = CommandContext {
        output: Output::new(output_mode),
        theme: theme.clone(),
        registry_path: cli.registry.clone(),
        probe_timeout,
        interactive: !is_ci() && console::Term::stdout().is_term(),
    };

    let dispatcher = CommandDispatcher::new(ctx);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("{}", theme.format_error(&format!("Error: {}", e)));
            ExitCode::from(1)
        }
    }
}

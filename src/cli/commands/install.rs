//! The `install` command: resolve missing tools and install them.

use dialoguer::Confirm;

use crate::cli::args::InstallArgs;
use crate::engine::{Selection, ToolReport};
use crate::error::Result;
use crate::managers::ShellInvoker;
use crate::ui::{report, ProgressSpinner};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The install command implementation.
pub struct InstallCommand {
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(args: InstallArgs) -> Self {
        Self { args }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        let registry = ctx.load_registry()?;
        let engine = ctx.engine(&registry);
        let selection = Selection {
            names: self.args.tools.clone(),
            tags: self.args.tag.clone(),
        };

        let resolution = engine.resolve(&selection);

        if self.args.dry_run {
            return self.show_plan(ctx, &resolution.steps, &resolution.reports);
        }

        // With --json, stdout carries only the report document; everything
        // decorative stays off the stream.
        let decorate = !self.args.json;

        if !resolution.steps.is_empty() {
            if decorate {
                for step in &resolution.steps {
                    let command = step.manager.def().install_command(&step.package);
                    ctx.output.println(&format!(
                        "  {} {}",
                        ctx.theme.highlight.apply_to(&step.tool),
                        ctx.theme.command.apply_to(&command)
                    ));
                }
            }
            if !self.confirmed(ctx, resolution.steps.len())? {
                if decorate {
                    ctx.output.result("Aborted.");
                }
                return Ok(CommandResult::failure(1));
            }
        }

        let invoker = ShellInvoker::with_probe_timeout(ctx.probe_timeout);
        let mut reports = resolution.reports.clone();
        for step in &resolution.steps {
            if decorate {
                ctx.output.command_output(&format!(
                    "$ {}\n",
                    step.manager.def().install_command(&step.package)
                ));
            }
            let spinner = if decorate && ctx.output.mode().shows_spinners() {
                ProgressSpinner::new(&format!("Installing {} via {}...", step.tool, step.manager))
            } else {
                ProgressSpinner::hidden()
            };
            let r = engine.execute_step(step, &invoker);
            if decorate {
                if r.outcome.is_satisfied() {
                    spinner
                        .finish_success(&ctx.theme, &format!("{} via {}", step.tool, step.manager));
                } else {
                    spinner.finish_error(&ctx.theme, &format!("{} via {}", step.tool, step.manager));
                }
            }
            reports.push(r);
        }

        if self.args.json {
            ctx.output.result(&report::reports_json(&reports)?);
        } else {
            for r in &reports {
                ctx.output.println(&report::report_line(&ctx.theme, r));
            }
            ctx.output
                .result(&report::summary_line(&ctx.theme, &reports));
        }

        if reports.iter().any(|r| r.outcome.is_failure()) {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl InstallCommand {
    fn show_plan(
        &self,
        ctx: &CommandContext,
        steps: &[crate::engine::PlanStep],
        reports: &[ToolReport],
    ) -> Result<CommandResult> {
        if self.args.json {
            ctx.output.result(&serde_json::to_string_pretty(steps)?);
            return Ok(CommandResult::success());
        }
        for r in reports {
            ctx.output.println(&report::report_line(&ctx.theme, r));
        }
        if steps.is_empty() {
            ctx.output.result("Nothing to install.");
        } else {
            for step in steps {
                let command = step.manager.def().install_command(&step.package);
                ctx.output.result(&format!(
                    "{} {}",
                    ctx.theme.highlight.apply_to(&step.tool),
                    ctx.theme.command.apply_to(&command)
                ));
            }
        }
        Ok(CommandResult::success())
    }

    /// Ask before running installs, unless suppressed or non-interactive.
    fn confirmed(&self, ctx: &CommandContext, count: usize) -> Result<bool> {
        if self.args.yes || !ctx.interactive {
            return Ok(true);
        }
        let answer = Confirm::new()
            .with_prompt(format!("Install {} tool(s)?", count))
            .default(true)
            .interact()
            .map_err(|e| anyhow::anyhow!("confirmation prompt failed: {e}"))?;
        Ok(answer)
    }
}

//! The `managers` command: list package managers detected on this host.

use crate::cli::args::ManagersArgs;
use crate::error::Result;
use crate::managers::platform_priority;
use crate::ui::report;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The managers command implementation.
pub struct ManagersCommand {
    args: ManagersArgs,
}

impl ManagersCommand {
    /// Create a new managers command.
    pub fn new(args: ManagersArgs) -> Self {
        Self { args }
    }
}

impl Command for ManagersCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        let host = ctx.probe_host();

        if self.args.json {
            let value = serde_json::json!({
                "platform": host.platform().to_string(),
                "available": host.details().iter().map(|s| {
                    serde_json::json!({
                        "manager": s.id,
                        "path": s.path,
                        "version": s.version,
                    })
                }).collect::<Vec<_>>(),
                "timed_out": host.timed_out(),
            });
            ctx.output.result(&serde_json::to_string_pretty(&value)?);
            return Ok(CommandResult::success());
        }

        let theme = &ctx.theme;
        ctx.output.result(&theme.format_header(&format!(
            "Package managers on {}",
            host.platform()
        )));
        for line in report::manager_lines(theme, &host) {
            ctx.output.result(&line);
        }
        let absent: Vec<&str> = platform_priority(host.platform())
            .iter()
            .filter(|id| !host.is_available(**id) && !host.timed_out().contains(id))
            .map(|id| id.as_str())
            .collect();
        if !absent.is_empty() {
            ctx.output.result(
                &theme.format_skipped(&format!("not found: {}", absent.join(", "))),
            );
        }

        Ok(CommandResult::success())
    }
}

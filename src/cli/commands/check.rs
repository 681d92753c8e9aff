//! The `check` command: report tool availability without installing.

use crate::cli::args::CheckArgs;
use crate::engine::Selection;
use crate::error::Result;
use crate::ui::report;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        let registry = ctx.load_registry()?;
        let engine = ctx.engine(&registry);
        let selection = Selection {
            names: self.args.tools.clone(),
            tags: self.args.tag.clone(),
        };

        let reports = engine.check_only(&selection);

        // A request that expands to nothing (a typoed tag, say) must not
        // pass vacuously.
        if reports.is_empty() && !selection.is_empty() {
            if self.args.json {
                ctx.output.result(&report::reports_json(&reports)?);
            } else {
                ctx.output.result(
                    &ctx.theme
                        .format_warning("nothing in the registry matches the request"),
                );
            }
            return Ok(CommandResult::failure(1));
        }

        for r in &reports {
            tracing::debug!(tool = %r.tool, outcome = r.outcome.label(), "checked");
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

        // A check passes only when everything requested is usable right
        // now; missing-but-installable still fails it (CI gating relies
        // on this).
        if reports.iter().all(|r| r.outcome.is_satisfied()) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::dispatcher::test_context;

    #[test]
    fn tag_matching_nothing_fails_the_check() {
        let cmd = CheckCommand::new(CheckArgs {
            tools: vec![],
            tag: vec!["no-such-tag".to_string()],
            json: false,
        });
        let result = cmd.execute(&test_context(None)).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn unknown_tool_fails_the_check() {
        let cmd = CheckCommand::new(CheckArgs {
            tools: vec!["definitely-not-a-real-tool".to_string()],
            tag: vec![],
            json: false,
        });
        let result = cmd.execute(&test_context(None)).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }
}

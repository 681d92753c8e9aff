//! The `info` command: show tools' registry entries and host status.

use crate::cli::args::InfoArgs;
use crate::engine::Checker;
use crate::error::{OutfitterError, Result};
use crate::registry::ToolSpec;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(args: InfoArgs) -> Self {
        Self { args }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult> {
        let registry = ctx.load_registry()?;

        let names: Vec<String> = if self.args.tools.is_empty() {
            registry.names().map(String::from).collect()
        } else {
            self.args.tools.clone()
        };

        let mut specs = Vec::with_capacity(names.len());
        for name in &names {
            let spec = registry
                .lookup(name)
                .ok_or_else(|| OutfitterError::UnknownTool { name: name.clone() })?;
            specs.push(spec);
        }

        if self.args.json {
            let value: Vec<serde_json::Value> = specs
                .iter()
                .map(|spec| {
                    serde_json::json!({
                        "name": spec.name,
                        "record": spec.record,
                    })
                })
                .collect();
            ctx.output.result(&serde_json::to_string_pretty(&value)?);
            return Ok(CommandResult::success());
        }

        let checker = Checker::from_env();
        for spec in specs {
            self.show(ctx, &checker, spec);
        }

        Ok(CommandResult::success())
    }
}

impl InfoCommand {
    fn show(&self, ctx: &CommandContext, checker: &Checker<'_>, spec: &ToolSpec) {
        let theme = &ctx.theme;
        ctx.output.result(&theme.format_header(&spec.name));
        if let Some(comment) = &spec.record.comment {
            ctx.output
                .result(&format!("  {}", theme.dim.apply_to(comment.trim_end())));
        }
        if spec.is_library() {
            ctx.output.result(&format!(
                "  {}",
                theme.dim.apply_to("library (no executable)")
            ));
        } else {
            ctx.output
                .result(&format!("  commands: {}", spec.command_names().join(", ")));
        }
        if !spec.record.tags.is_empty() {
            let tags: Vec<&str> = spec.record.tags.iter().map(String::as_str).collect();
            ctx.output.result(&format!("  tags: {}", tags.join(", ")));
        }
        for (manager, package) in &spec.record.install_names {
            ctx.output.result(&format!(
                "  {} {}",
                theme.highlight.apply_to(manager),
                theme.command.apply_to(manager.def().install_command(package))
            ));
        }

        // Host status comes last: is it here right now?
        match checker.locate(spec) {
            Some(path) => ctx
                .output
                .result(&theme.format_success(&format!("found at {}", path.display()))),
            None if spec.is_library() => ctx.output.result(&format!(
                "  {}",
                theme.dim.apply_to("presence not checkable")
            )),
            None => ctx
                .output
                .result(&theme.format_skipped("not found on PATH")),
        }
    }
}

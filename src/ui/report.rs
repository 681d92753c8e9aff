//! Rendering of per-tool reports and run summaries.

use crate::engine::{ToolOutcome, ToolReport};
use crate::managers::HostCapabilities;

use super::theme::Theme;

/// Format one tool's report as a display line.
pub fn report_line(theme: &Theme, report: &ToolReport) -> String {
    let tool = theme.highlight.apply_to(&report.tool);
    match &report.outcome {
        ToolOutcome::AlreadySatisfied { path } => {
            let detail = match path {
                Some(p) => format!("{} ({})", tool, theme.dim.apply_to(p.display())),
                None => format!("{}", tool),
            };
            theme.format_success(&detail)
        }
        ToolOutcome::Missing { installable_via } => theme.format_skipped(&format!(
            "{} missing, installable via {}",
            tool, installable_via
        )),
        ToolOutcome::Installed { manager } => {
            theme.format_success(&format!("{} installed via {}", tool, manager))
        }
        ToolOutcome::UnknownTool => theme.format_error(&format!("{} is not a known tool", tool)),
        ToolOutcome::NoProvider => theme.format_warning(&format!(
            "{} not installable by any package manager on this host",
            tool
        )),
        ToolOutcome::InstallFailed { manager, detail } => {
            theme.format_error(&format!("{} install via {} failed: {}", tool, manager, detail))
        }
        ToolOutcome::VerifyFailed { manager } => theme.format_error(&format!(
            "{} installed via {} but still not detected",
            tool, manager
        )),
    }
}

/// Format the end-of-run summary line.
pub fn summary_line(theme: &Theme, reports: &[ToolReport]) -> String {
    let satisfied = reports.iter().filter(|r| r.outcome.is_satisfied()).count();
    let missing = reports
        .iter()
        .filter(|r| matches!(r.outcome, ToolOutcome::Missing { .. }))
        .count();
    let failed = reports.iter().filter(|r| r.outcome.is_failure()).count();

    let mut parts = vec![format!("{} ok", satisfied)];
    if missing > 0 {
        parts.push(format!("{} missing", missing));
    }
    if failed > 0 {
        parts.push(format!("{} failed", failed));
    }
    let text = format!("{} tools: {}", reports.len(), parts.join(", "));

    if failed > 0 {
        theme.format_error(&text)
    } else if missing > 0 {
        theme.format_warning(&text)
    } else {
        theme.format_success(&text)
    }
}

/// Format the detected package managers, in the host's priority order.
pub fn manager_lines(theme: &Theme, host: &HostCapabilities) -> Vec<String> {
    let mut lines = Vec::new();
    for status in host.details() {
        let name = theme.highlight.apply_to(status.id.as_str());
        let mut detail = status.path.display().to_string();
        if let Some(version) = &status.version {
            detail = format!("{} ({})", detail, version);
        }
        lines.push(theme.format_success(&format!(
            "{} {}",
            name,
            theme.dim.apply_to(detail)
        )));
    }
    for id in host.timed_out() {
        lines.push(theme.format_warning(&format!("{} probe timed out", id)));
    }
    lines
}

/// Serialize reports for `--json` output.
pub fn reports_json(reports: &[ToolReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

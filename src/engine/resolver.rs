//! Installation planning.
//!
//! [`resolve`] is pure computation over already-collected data: given the
//! requested tools, the registry, the host capabilities, and the
//! availability checker, it produces an ordered plan plus immediate
//! outcomes for tools that need no step. Repeated calls with identical
//! inputs yield identical plans.

use crate::engine::checker::Checker;
use crate::engine::outcome::{ToolOutcome, ToolReport};
use crate::managers::{HostCapabilities, PackageManagerId};
use crate::registry::RegistryIndex;
use serde::Serialize;

/// One concrete installation action.
///
/// Immutable once created; the executor produces an outcome record
/// alongside it, never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    /// Registry name of the tool.
    pub tool: String,
    /// The manager chosen by host priority order.
    pub manager: PackageManagerId,
    /// That manager's package identifier for the tool.
    pub package: String,
}

/// The result of plan resolution.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Steps for still-missing, installable tools, in request order.
    pub steps: Vec<PlanStep>,
    /// Immediate outcomes for tools needing no step, in request order.
    pub reports: Vec<ToolReport>,
}

impl Resolution {
    /// Outcomes for every requested tool, treating plan steps as
    /// [`ToolOutcome::Missing`]. This is the check-only view of a run.
    pub fn check_reports(&self) -> Vec<ToolReport> {
        let mut all: Vec<ToolReport> = self.reports.clone();
        all.extend(self.steps.iter().map(|step| {
            ToolReport::new(
                step.tool.clone(),
                ToolOutcome::Missing {
                    installable_via: step.manager,
                },
            )
        }));
        all
    }
}

/// Compute an installation plan.
///
/// For each requested name, in order:
/// 1. unknown names get an immediate `UnknownTool` outcome;
/// 2. satisfied tools get `AlreadySatisfied` and no step;
/// 3. otherwise the first manager in the HOST's priority order that both
///    is available and lists the tool is chosen — host order is the
///    tie-break, never registry insertion order or alphabetical order;
/// 4. tools no available manager covers get `NoProvider`; an install is
///    never attempted through an unavailable manager.
///
/// Duplicate requests are resolved once, at their first position.
pub fn resolve(
    requested: &[String],
    registry: &RegistryIndex,
    host: &HostCapabilities,
    checker: &Checker<'_>,
) -> Resolution {
    let mut resolution = Resolution::default();
    let mut seen = std::collections::BTreeSet::new();

    for name in requested {
        if !seen.insert(name.as_str()) {
            continue;
        }

        let Some(spec) = registry.lookup(name) else {
            tracing::debug!(tool = %name, "not in registry");
            resolution
                .reports
                .push(ToolReport::new(name.clone(), ToolOutcome::UnknownTool));
            continue;
        };

        if checker.is_satisfied(spec) {
            resolution.reports.push(ToolReport::new(
                name.clone(),
                ToolOutcome::AlreadySatisfied {
                    path: checker.locate(spec),
                },
            ));
            continue;
        }

        let chosen = host
            .available()
            .iter()
            .find_map(|id| spec.install_name(*id).map(|pkg| (*id, pkg.to_string())));

        match chosen {
            Some((manager, package)) => {
                tracing::debug!(tool = %name, %manager, %package, "planned");
                resolution.steps.push(PlanStep {
                    tool: name.clone(),
                    manager,
                    package,
                });
            }
            None => {
                tracing::debug!(tool = %name, "no available manager covers this tool");
                resolution
                    .reports
                    .push(ToolReport::new(name.clone(), ToolOutcome::NoProvider));
            }
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::Platform;
    use crate::registry::{ToolRecord, ToolSpec};

    fn spec(name: &str, commands: &[&str], installs: &[(PackageManagerId, &str)]) -> ToolSpec {
        ToolSpec::new(
            name,
            ToolRecord {
                command_names: commands.iter().map(|s| s.to_string()).collect(),
                install_names: installs
                    .iter()
                    .map(|(id, pkg)| (*id, pkg.to_string()))
                    .collect(),
                ..Default::default()
            },
        )
    }

    fn empty_checker() -> Checker<'static> {
        Checker::with_path_entries(vec![])
    }

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unknown_name_yields_unknown_tool() {
        let registry = RegistryIndex::from_specs([]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let resolution = resolve(&names(&["ghost"]), &registry, &host, &empty_checker());

        assert!(resolution.steps.is_empty());
        assert_eq!(resolution.reports.len(), 1);
        assert_eq!(resolution.reports[0].outcome, ToolOutcome::UnknownTool);
    }

    #[test]
    fn host_priority_order_wins() {
        // Tool installable via both apt and pixi; Linux host prioritizes apt.
        let registry = RegistryIndex::from_specs([spec(
            "ripgrep",
            &["rg"],
            &[
                (PackageManagerId::Pixi, "ripgrep"),
                (PackageManagerId::Apt, "ripgrep"),
            ],
        )]);
        let host = HostCapabilities::synthetic(
            Platform::Linux,
            &[PackageManagerId::Pixi, PackageManagerId::Apt],
        );
        let resolution = resolve(&names(&["ripgrep"]), &registry, &host, &empty_checker());

        assert_eq!(resolution.steps.len(), 1);
        assert_eq!(resolution.steps[0].manager, PackageManagerId::Apt);
    }

    #[test]
    fn unavailable_manager_is_never_chosen() {
        // Only brew lists the tool, but brew is not available on this host.
        let registry = RegistryIndex::from_specs([spec(
            "dust",
            &["dust"],
            &[(PackageManagerId::Brew, "dust")],
        )]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let resolution = resolve(&names(&["dust"]), &registry, &host, &empty_checker());

        assert!(resolution.steps.is_empty());
        assert_eq!(resolution.reports[0].outcome, ToolOutcome::NoProvider);
    }

    #[test]
    fn plan_preserves_request_order() {
        let registry = RegistryIndex::from_specs([
            spec("a", &["a"], &[(PackageManagerId::Apt, "a")]),
            spec("b", &["b"], &[(PackageManagerId::Apt, "b")]),
            spec("c", &["c"], &[(PackageManagerId::Apt, "c")]),
        ]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let resolution = resolve(&names(&["c", "a", "b"]), &registry, &host, &empty_checker());

        let order: Vec<&str> = resolution.steps.iter().map(|s| s.tool.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn duplicate_requests_resolve_once() {
        let registry =
            RegistryIndex::from_specs([spec("a", &["a"], &[(PackageManagerId::Apt, "a")])]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let resolution = resolve(&names(&["a", "a"]), &registry, &host, &empty_checker());
        assert_eq!(resolution.steps.len(), 1);
    }

    #[test]
    fn satisfied_tool_is_excluded_from_plan() {
        use std::fs;
        let temp = tempfile::TempDir::new().unwrap();
        let bin = temp.path().join("rg");
        fs::write(&bin, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let registry = RegistryIndex::from_specs([spec(
            "ripgrep",
            &["rg"],
            &[(PackageManagerId::Apt, "ripgrep")],
        )]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let resolution = resolve(&names(&["ripgrep"]), &registry, &host, &checker);

        assert!(resolution.steps.is_empty());
        assert!(matches!(
            resolution.reports[0].outcome,
            ToolOutcome::AlreadySatisfied { path: Some(_) }
        ));
    }

    #[test]
    fn resolve_is_deterministic() {
        let registry = RegistryIndex::from_specs([
            spec(
                "ripgrep",
                &["rg"],
                &[
                    (PackageManagerId::Apt, "ripgrep"),
                    (PackageManagerId::Pip, "ripgrep"),
                ],
            ),
            spec("tail", &["tail"], &[]),
        ]);
        let host = HostCapabilities::synthetic(
            Platform::Linux,
            &[PackageManagerId::Apt, PackageManagerId::Pip],
        );
        let requested = names(&["ripgrep", "tail"]);

        let first = resolve(&requested, &registry, &host, &empty_checker());
        let second = resolve(&requested, &registry, &host, &empty_checker());
        assert_eq!(first.steps, second.steps);
        assert_eq!(first.reports, second.reports);
    }

    #[test]
    fn check_reports_cover_all_requested() {
        let registry = RegistryIndex::from_specs([
            spec("a", &["a"], &[(PackageManagerId::Apt, "a")]),
            spec("tail", &["tail"], &[]),
        ]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let resolution = resolve(&names(&["a", "tail", "ghost"]), &registry, &host, &empty_checker());

        let reports = resolution.check_reports();
        assert_eq!(reports.len(), 3);
        let a = reports.iter().find(|r| r.tool == "a").unwrap();
        assert_eq!(
            a.outcome,
            ToolOutcome::Missing {
                installable_via: PackageManagerId::Apt
            }
        );
    }

    #[test]
    fn tail_and_ripgrep_scenario() {
        // The registry knows `tail` (no manager covers it) and `ripgrep`
        // (several managers). The host has exactly one manager which lists
        // ripgrep only.
        let registry = RegistryIndex::from_specs([
            spec("tail", &["tail"], &[]),
            spec(
                "ripgrep",
                &["rg"],
                &[
                    (PackageManagerId::Apt, "ripgrep"),
                    (PackageManagerId::Brew, "ripgrep"),
                    (PackageManagerId::Pixi, "ripgrep"),
                ],
            ),
        ]);
        let host = HostCapabilities::synthetic(Platform::Linux, &[PackageManagerId::Apt]);
        let resolution = resolve(
            &names(&["tail", "ripgrep"]),
            &registry,
            &host,
            &empty_checker(),
        );

        assert_eq!(resolution.reports.len(), 1);
        assert_eq!(resolution.reports[0].tool, "tail");
        assert_eq!(resolution.reports[0].outcome, ToolOutcome::NoProvider);

        assert_eq!(resolution.steps.len(), 1);
        assert_eq!(resolution.steps[0].tool, "ripgrep");
        assert_eq!(resolution.steps[0].manager, PackageManagerId::Apt);
        assert_eq!(resolution.steps[0].package, "ripgrep");
    }
}

//! Plan execution and verification.
//!
//! Steps run strictly sequentially: concurrent invocations of a package
//! manager commonly corrupt its lock or database state, so the executor
//! serializes everything. One step's failure never aborts the rest; every
//! step gets attempted and reported.
//!
//! After a success-signaled install the availability checker re-runs for
//! that tool. A manager's own success report is not trusted as the final
//! truth: some exit zero without placing the binary on the resolvable
//! path, and those downgrade to `VerifyFailed`. The one exception is a
//! tool with no presence check at all (a library without an attached
//! probe), where the manager's signal is the only evidence there is.

use crate::engine::checker::Checker;
use crate::engine::outcome::{ToolOutcome, ToolReport};
use crate::engine::resolver::PlanStep;
use crate::managers::ManagerInvoker;
use crate::registry::RegistryIndex;

/// Executes installation plans through a [`ManagerInvoker`].
pub struct Executor<'a> {
    invoker: &'a dyn ManagerInvoker,
    checker: &'a Checker<'a>,
    registry: &'a RegistryIndex,
}

impl<'a> Executor<'a> {
    pub fn new(
        invoker: &'a dyn ManagerInvoker,
        checker: &'a Checker<'a>,
        registry: &'a RegistryIndex,
    ) -> Self {
        Self {
            invoker,
            checker,
            registry,
        }
    }

    /// Execute one step and verify the result.
    pub fn execute_step(&self, step: &PlanStep) -> ToolReport {
        let result = self.invoker.install(step.manager, &step.package);

        if !result.success {
            tracing::warn!(
                tool = %step.tool,
                manager = %step.manager,
                detail = %result.detail,
                "install failed"
            );
            return ToolReport::new(
                step.tool.clone(),
                ToolOutcome::InstallFailed {
                    manager: step.manager,
                    detail: result.detail,
                },
            );
        }

        // The manager says it succeeded; confirm the tool actually resolves.
        let verified = match self.registry.lookup(&step.tool) {
            // A library with no attached probe has no presence check at
            // all; the manager's success signal is the only evidence.
            Some(spec) if !self.checker.can_verify(spec) => {
                tracing::debug!(
                    tool = %step.tool,
                    "no presence check available; trusting the manager's signal"
                );
                true
            }
            Some(spec) => self.checker.is_satisfied(spec),
            // Steps only come from the resolver, which looked the tool up;
            // a vanished entry means the caller mixed registries.
            None => false,
        };

        if verified {
            tracing::info!(tool = %step.tool, manager = %step.manager, "installed");
            ToolReport::new(
                step.tool.clone(),
                ToolOutcome::Installed {
                    manager: step.manager,
                },
            )
        } else {
            tracing::warn!(
                tool = %step.tool,
                manager = %step.manager,
                "manager reported success but tool still not resolvable"
            );
            ToolReport::new(
                step.tool.clone(),
                ToolOutcome::VerifyFailed {
                    manager: step.manager,
                },
            )
        }
    }

    /// Execute a full plan sequentially, reporting every step.
    pub fn execute(&self, steps: &[PlanStep]) -> Vec<ToolReport> {
        steps.iter().map(|step| self.execute_step(step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::{InstallResult, PackageManagerId};
    use crate::registry::{ToolRecord, ToolSpec};
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn registry_of(entries: &[(&str, &str)]) -> RegistryIndex {
        RegistryIndex::from_specs(entries.iter().map(|(name, cmd)| {
            ToolSpec::new(
                *name,
                ToolRecord {
                    command_names: vec![cmd.to_string()],
                    install_names: [(PackageManagerId::Apt, name.to_string())]
                        .into_iter()
                        .collect(),
                    ..Default::default()
                },
            )
        }))
    }

    fn library_spec(name: &str) -> ToolSpec {
        ToolSpec::new(
            name,
            ToolRecord {
                command_names: vec![],
                install_names: [(PackageManagerId::Apt, format!("{name}-dev"))]
                    .into_iter()
                    .collect(),
                tags: ["library".to_string()].into_iter().collect(),
                ..Default::default()
            },
        )
    }

    fn step(tool: &str) -> PlanStep {
        PlanStep {
            tool: tool.to_string(),
            manager: PackageManagerId::Apt,
            package: tool.to_string(),
        }
    }

    /// Invoker that "installs" by dropping a fake binary into a directory,
    /// or lies about success, per configuration.
    struct FakeInvoker {
        bin_dir: PathBuf,
        /// Tools whose install invocation reports failure.
        fail: Vec<String>,
        /// Tools whose install reports success without creating a binary.
        lie: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeInvoker {
        fn new(bin_dir: &Path) -> Self {
            Self {
                bin_dir: bin_dir.to_path_buf(),
                fail: Vec::new(),
                lie: Vec::new(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ManagerInvoker for FakeInvoker {
        fn probe(&self, _id: PackageManagerId) -> bool {
            true
        }

        fn install(&self, _id: PackageManagerId, package: &str) -> InstallResult {
            self.calls.borrow_mut().push(package.to_string());
            if self.fail.iter().any(|t| t == package) {
                return InstallResult::failed("exit code 100");
            }
            if !self.lie.iter().any(|t| t == package) {
                create_fake_binary(&self.bin_dir.join(package));
            }
            InstallResult::ok()
        }
    }

    #[test]
    fn successful_install_verifies_and_reports_installed() {
        let temp = TempDir::new().unwrap();
        let registry = registry_of(&[("ripgrep", "ripgrep")]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let invoker = FakeInvoker::new(temp.path());
        let executor = Executor::new(&invoker, &checker, &registry);

        let report = executor.execute_step(&step("ripgrep"));
        assert_eq!(
            report.outcome,
            ToolOutcome::Installed {
                manager: PackageManagerId::Apt
            }
        );
    }

    #[test]
    fn failed_install_reports_install_failed() {
        let temp = TempDir::new().unwrap();
        let registry = registry_of(&[("ripgrep", "ripgrep")]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let mut invoker = FakeInvoker::new(temp.path());
        invoker.fail.push("ripgrep".to_string());
        let executor = Executor::new(&invoker, &checker, &registry);

        let report = executor.execute_step(&step("ripgrep"));
        assert_eq!(
            report.outcome,
            ToolOutcome::InstallFailed {
                manager: PackageManagerId::Apt,
                detail: "exit code 100".to_string()
            }
        );
    }

    #[test]
    fn lying_manager_downgrades_to_verify_failed() {
        let temp = TempDir::new().unwrap();
        let registry = registry_of(&[("ripgrep", "ripgrep")]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let mut invoker = FakeInvoker::new(temp.path());
        invoker.lie.push("ripgrep".to_string());
        let executor = Executor::new(&invoker, &checker, &registry);

        let report = executor.execute_step(&step("ripgrep"));
        assert_eq!(
            report.outcome,
            ToolOutcome::VerifyFailed {
                manager: PackageManagerId::Apt
            }
        );
    }

    #[test]
    fn library_without_probe_trusts_the_manager_signal() {
        // No presence check exists for libmagic; a genuine manager
        // success must report Installed, not a guaranteed VerifyFailed.
        let temp = TempDir::new().unwrap();
        let registry = RegistryIndex::from_specs([library_spec("libmagic")]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let invoker = FakeInvoker::new(temp.path());
        let executor = Executor::new(&invoker, &checker, &registry);

        let report = executor.execute_step(&step("libmagic"));
        assert_eq!(
            report.outcome,
            ToolOutcome::Installed {
                manager: PackageManagerId::Apt
            }
        );
    }

    #[test]
    fn library_with_probe_still_verifies() {
        struct NeverPresent;
        impl crate::engine::checker::LibraryProbe for NeverPresent {
            fn is_present(&self, _spec: &ToolSpec) -> bool {
                false
            }
        }

        let temp = TempDir::new().unwrap();
        let registry = RegistryIndex::from_specs([library_spec("libmagic")]);
        let probe = NeverPresent;
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()])
            .with_library_probe(&probe);
        let invoker = FakeInvoker::new(temp.path());
        let executor = Executor::new(&invoker, &checker, &registry);

        let report = executor.execute_step(&step("libmagic"));
        assert_eq!(
            report.outcome,
            ToolOutcome::VerifyFailed {
                manager: PackageManagerId::Apt
            }
        );
    }

    #[test]
    fn first_failure_does_not_abort_remaining_steps() {
        let temp = TempDir::new().unwrap();
        let registry = registry_of(&[("broken", "broken"), ("fine", "fine")]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let mut invoker = FakeInvoker::new(temp.path());
        invoker.fail.push("broken".to_string());
        let executor = Executor::new(&invoker, &checker, &registry);

        let reports = executor.execute(&[step("broken"), step("fine")]);
        assert_eq!(reports.len(), 2);
        assert!(matches!(
            reports[0].outcome,
            ToolOutcome::InstallFailed { .. }
        ));
        assert!(matches!(reports[1].outcome, ToolOutcome::Installed { .. }));
        // Both invocations actually happened, in order
        assert_eq!(*invoker.calls.borrow(), vec!["broken", "fine"]);
    }

    #[test]
    fn verification_uses_alternative_command_names() {
        // Install lands the Debian-style alternative name; verification
        // must still pass because any command name satisfies the tool.
        let temp = TempDir::new().unwrap();
        let registry = RegistryIndex::from_specs([ToolSpec::new(
            "fd",
            ToolRecord {
                command_names: vec!["fd".to_string(), "fdfind".to_string()],
                install_names: [(PackageManagerId::Apt, "fdfind".to_string())]
                    .into_iter()
                    .collect(),
                ..Default::default()
            },
        )]);
        let checker = Checker::with_path_entries(vec![temp.path().to_path_buf()]);
        let invoker = FakeInvoker::new(temp.path());
        let executor = Executor::new(&invoker, &checker, &registry);

        let report = executor.execute_step(&PlanStep {
            tool: "fd".to_string(),
            manager: PackageManagerId::Apt,
            package: "fdfind".to_string(),
        });
        assert!(matches!(report.outcome, ToolOutcome::Installed { .. }));
    }
}

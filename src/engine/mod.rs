//! The resolution and installation engine.
//!
//! # Modules
//!
//! - [`checker`] - Availability checking against the host search path
//! - [`resolver`] - Pure plan computation
//! - [`installer`] - Sequential plan execution with verification
//! - [`outcome`] - Per-tool result model
//!
//! [`Engine`] ties these together behind the three operations the CLI (or
//! a library consumer) needs: `check_only`, `resolve`, and `execute`. Host
//! capabilities are an explicit value threaded through every call, never
//! hidden global state, so the whole pipeline runs against synthetic
//! hosts in tests.

pub mod checker;
pub mod installer;
pub mod outcome;
pub mod resolver;

pub use checker::{Checker, LibraryProbe};
pub use installer::Executor;
pub use outcome::{ToolOutcome, ToolReport};
pub use resolver::{resolve, PlanStep, Resolution};

use crate::managers::{HostCapabilities, ManagerInvoker};
use crate::registry::RegistryIndex;

/// Which tools a run operates on.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Explicit tool names, in request order.
    pub names: Vec<String>,
    /// Registry tags; matching tools are appended in name order.
    pub tags: Vec<String>,
}

impl Selection {
    pub fn names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            tags: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.tags.is_empty()
    }

    /// Expand to concrete tool names against a registry.
    ///
    /// Explicit names first (kept verbatim, even when unknown, so they can
    /// surface as `UnknownTool`), then tag matches in name order. An empty
    /// selection expands to the whole registry.
    pub fn expand(&self, registry: &RegistryIndex) -> Vec<String> {
        if self.is_empty() {
            return registry.names().map(String::from).collect();
        }
        let mut expanded = self.names.clone();
        for tag in &self.tags {
            for spec in registry.by_tag(tag) {
                if !expanded.contains(&spec.name) {
                    expanded.push(spec.name.clone());
                }
            }
        }
        expanded
    }
}

/// The engine: registry + host capabilities + availability checker.
///
/// Stateless between runs; nothing is cached across invocations.
pub struct Engine<'a> {
    registry: &'a RegistryIndex,
    host: HostCapabilities,
    checker: Checker<'a>,
}

impl<'a> Engine<'a> {
    pub fn new(registry: &'a RegistryIndex, host: HostCapabilities) -> Self {
        Self {
            registry,
            host,
            checker: Checker::from_env(),
        }
    }

    /// Replace the default checker (custom path entries or library probe).
    pub fn with_checker(mut self, checker: Checker<'a>) -> Self {
        self.checker = checker;
        self
    }

    pub fn registry(&self) -> &RegistryIndex {
        self.registry
    }

    pub fn host(&self) -> &HostCapabilities {
        &self.host
    }

    /// Resolve a selection into a plan plus immediate outcomes.
    pub fn resolve(&self, selection: &Selection) -> Resolution {
        let requested = selection.expand(self.registry);
        resolver::resolve(&requested, self.registry, &self.host, &self.checker)
    }

    /// Outcomes for a selection without any side effects.
    pub fn check_only(&self, selection: &Selection) -> Vec<ToolReport> {
        self.resolve(selection).check_reports()
    }

    /// Execute a plan through an invoker, sequentially, verifying each
    /// success-signaled step.
    pub fn execute(&self, steps: &[PlanStep], invoker: &dyn ManagerInvoker) -> Vec<ToolReport> {
        Executor::new(invoker, &self.checker, self.registry).execute(steps)
    }

    /// Execute a single step (lets callers drive per-step progress UI).
    pub fn execute_step(&self, step: &PlanStep, invoker: &dyn ManagerInvoker) -> ToolReport {
        Executor::new(invoker, &self.checker, self.registry).execute_step(step)
    }
}

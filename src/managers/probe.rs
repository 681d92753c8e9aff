//! Host probing for available package managers.
//!
//! [`HostProbe::detect`] determines the current platform and which package
//! managers are actually usable: the manager's executable resolves on PATH
//! and its version command responds within a bounded timeout. Managers that
//! don't apply to the platform are skipped without invocation.
//!
//! Probes run concurrently on a small worker pool; one slow or broken
//! manager never blocks or aborts the others. A failed probe degrades to
//! "unavailable".

use crate::managers::defs::{platform_priority, PackageManagerId, Platform};
use crate::shell::command::{execute, CommandOptions};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Default per-probe timeout.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of concurrent probe workers.
const PROBE_WORKERS: usize = 4;

/// Detail about one manager found on the host.
#[derive(Debug, Clone)]
pub struct ManagerStatus {
    pub id: PackageManagerId,
    /// Resolved path of the manager's executable.
    pub path: PathBuf,
    /// Version string extracted from the probe output, when one was found.
    pub version: Option<String>,
}

/// The resolved host environment: platform plus the ordered set of package
/// managers usable on this host.
///
/// Ordering of `available` follows the fixed platform priority from
/// [`platform_priority`], not discovery order. The resolver's tie-break
/// depends on this.
#[derive(Debug, Clone)]
pub struct HostCapabilities {
    platform: Platform,
    available: Vec<PackageManagerId>,
    details: Vec<ManagerStatus>,
    timed_out: Vec<PackageManagerId>,
}

impl HostCapabilities {
    /// The detected platform.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Usable managers in priority order.
    pub fn available(&self) -> &[PackageManagerId] {
        &self.available
    }

    /// Whether a specific manager is usable on this host.
    pub fn is_available(&self, id: PackageManagerId) -> bool {
        self.available.contains(&id)
    }

    /// Probe detail per found manager, in priority order.
    pub fn details(&self) -> &[ManagerStatus] {
        &self.details
    }

    /// Managers whose probe exceeded the timeout (treated as unavailable).
    pub fn timed_out(&self) -> &[PackageManagerId] {
        &self.timed_out
    }

    /// Build synthetic capabilities for tests and library callers.
    ///
    /// The given managers are reordered into the platform's priority order;
    /// managers not applicable to the platform are dropped.
    pub fn synthetic(platform: Platform, managers: &[PackageManagerId]) -> Self {
        let available: Vec<PackageManagerId> = platform_priority(platform)
            .iter()
            .copied()
            .filter(|id| managers.contains(id))
            .collect();
        Self {
            platform,
            available,
            details: Vec::new(),
            timed_out: Vec::new(),
        }
    }
}

/// Probes the host for usable package managers.
#[derive(Debug, Clone)]
pub struct HostProbe {
    timeout: Duration,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Detect the host's capabilities.
    ///
    /// Read-only: resolves executables and runs each candidate manager's
    /// version command, nothing else.
    pub fn detect(&self) -> HostCapabilities {
        self.detect_on(Platform::current())
    }

    /// Detect capabilities for an explicit platform (test seam).
    pub fn detect_on(&self, platform: Platform) -> HostCapabilities {
        let path_entries = parse_system_path();
        let candidates: Vec<PackageManagerId> = platform_priority(platform).to_vec();

        let results = run_probes(&candidates, &path_entries, self.timeout);

        let mut details = Vec::new();
        let mut timed_out = Vec::new();
        // Reassemble in priority order; worker completion order is arbitrary.
        for id in &candidates {
            match results.iter().find(|(rid, _)| rid == id) {
                Some((_, ProbeOutcome::Found(status))) => details.push(status.clone()),
                Some((_, ProbeOutcome::TimedOut)) => timed_out.push(*id),
                _ => {}
            }
        }

        let available = details.iter().map(|s| s.id).collect();
        HostCapabilities {
            platform,
            available,
            details,
            timed_out,
        }
    }
}

#[derive(Debug, Clone)]
enum ProbeOutcome {
    Found(ManagerStatus),
    NotFound,
    TimedOut,
}

/// Run all probes on a bounded worker pool and collect the outcomes.
fn run_probes(
    candidates: &[PackageManagerId],
    path_entries: &[PathBuf],
    timeout: Duration,
) -> Vec<(PackageManagerId, ProbeOutcome)> {
    let (job_tx, job_rx) = mpsc::channel::<PackageManagerId>();
    let job_rx = Arc::new(Mutex::new(job_rx));
    let (result_tx, result_rx) = mpsc::channel();

    for id in candidates {
        job_tx.send(*id).expect("job channel open");
    }
    drop(job_tx);

    let workers = candidates.len().min(PROBE_WORKERS);
    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = Arc::clone(&job_rx);
            let result_tx = result_tx.clone();
            scope.spawn(move || loop {
                let job = {
                    let rx = job_rx.lock().expect("probe job queue lock");
                    rx.recv()
                };
                let Ok(id) = job else { break };
                let outcome = probe_manager(id, path_entries, timeout);
                if result_tx.send((id, outcome)).is_err() {
                    break;
                }
            });
        }
        drop(result_tx);
    });

    result_rx.iter().collect()
}

/// Probe one manager: executable on PATH, then version command responsive.
fn probe_manager(
    id: PackageManagerId,
    path_entries: &[PathBuf],
    timeout: Duration,
) -> ProbeOutcome {
    let def = id.def();

    let Some(path) = def
        .command_names
        .iter()
        .find_map(|name| resolve_tool_path(name, path_entries))
    else {
        tracing::debug!(manager = %id, "not found on PATH");
        return ProbeOutcome::NotFound;
    };

    let options = CommandOptions {
        timeout: Some(timeout),
        ..Default::default()
    };
    match execute(def.version_command, &options) {
        Ok(result) if result.timed_out => {
            tracing::warn!(manager = %id, ?timeout, "probe timed out");
            ProbeOutcome::TimedOut
        }
        Ok(result) if result.success => {
            let version = extract_version(&result.stdout);
            tracing::debug!(manager = %id, path = %path.display(), ?version, "found");
            ProbeOutcome::Found(ManagerStatus { id, path, version })
        }
        Ok(result) => {
            tracing::debug!(
                manager = %id,
                code = ?result.exit_code,
                "version command failed"
            );
            ProbeOutcome::NotFound
        }
        Err(e) => {
            tracing::debug!(manager = %id, error = %e, "probe error");
            ProbeOutcome::NotFound
        }
    }
}

/// Pull a dotted version number out of probe output.
fn extract_version(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"\d+\.\d+(\.\d+)*").expect("valid version regex");
    let first_line = output.lines().next().unwrap_or("");
    re.find(first_line).map(|m| m.as_str().to_string())
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT shell
/// out to `which` — its behavior varies across systems and it is sometimes
/// a builtin with inconsistent error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if cfg!(windows) {
            for ext in ["exe", "cmd", "bat", "com"] {
                let candidate = dir.join(format!("{tool}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

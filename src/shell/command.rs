//! Shell command execution.
//!
//! All external commands (probe version queries, install invocations) go
//! through [`execute`]. Output is always captured so probes never pollute
//! stdout, and an optional timeout kills commands that hang. Only the exit
//! status is treated as authoritative; callers must not infer success from
//! output text.

use crate::error::{OutfitterError, Result};
use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timeout).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed because it exceeded the timeout.
    pub timed_out: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Timeout (None = no timeout).
    pub timeout: Option<Duration>,
}

/// Execute a shell command, capturing output.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }
    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|_| OutfitterError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let Some(timeout) = options.timeout else {
        let output = child
            .wait_with_output()
            .map_err(|_| OutfitterError::CommandFailed {
                command: command.to_string(),
                code: None,
            })?;
        return Ok(result_from_output(
            output.status.success(),
            output.status.code(),
            &output.stdout,
            &output.stderr,
            start.elapsed(),
        ));
    };

    // Drain pipes on a separate thread so the child can't block on a full
    // pipe while we poll for its exit.
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let reader = thread::spawn(move || {
        use std::io::Read;
        let mut out = Vec::new();
        let mut err = Vec::new();
        if let Some(mut s) = stdout {
            let _ = s.read_to_end(&mut out);
        }
        if let Some(mut s) = stderr {
            let _ = s.read_to_end(&mut err);
        }
        (out, err)
    });

    // Poll the child until it exits or the timeout fires.
    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait().map_err(OutfitterError::Io)? {
            break Some(status);
        }
        if Instant::now() >= deadline {
            break None;
        }
        thread::sleep(Duration::from_millis(20));
    };

    match status {
        Some(status) => {
            let (out, err) = reader.join().unwrap_or_default();
            Ok(result_from_output(
                status.success(),
                status.code(),
                &out,
                &err,
                start.elapsed(),
            ))
        }
        None => {
            tracing::debug!(command, ?timeout, "command timed out, killing");
            let _ = child.kill();
            let _ = child.wait();
            let (out, err) = reader.join().unwrap_or_default();
            let mut result = result_from_output(false, None, &out, &err, start.elapsed());
            result.timed_out = true;
            Ok(result)
        }
    }
}

/// Execute a command and return success/failure.
pub fn execute_check(command: &str, timeout: Option<Duration>) -> bool {
    let options = CommandOptions {
        timeout,
        ..Default::default()
    };
    execute(command, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

fn result_from_output(
    success: bool,
    exit_code: Option<i32>,
    stdout: &[u8],
    stderr: &[u8],
    duration: Duration,
) -> CommandResult {
    CommandResult {
        exit_code,
        stdout: String::from_utf8_lossy(stdout).to_string(),
        stderr: String::from_utf8_lossy(stderr).to_string(),
        duration,
        success,
        timed_out: false,
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

//! External command execution with hard timeouts.

use crate::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

/// An external command and how long it may run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or path
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
    /// Hard limit; the process is killed when it elapses
    pub timeout: Duration,
    /// Inherit the terminal instead of capturing output (for prompts)
    #[serde(default)]
    pub interactive: bool,
}

/// What an external command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured standard output, lossily decoded
    pub stdout: String,
}

/// The external commands one acquisition cycle depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSet {
    /// Charge level, power source and time remaining
    pub battery_status: CommandSpec,
    /// Cycle count and health condition
    pub hardware_profile: CommandSpec,
    /// CPU/GPU/ANE power sample; needs elevated privileges
    pub power_sampling: CommandSpec,
    /// Caches elevated privileges before monitoring starts
    pub privilege_elevation: CommandSpec,
}

/// Runs external commands on behalf of the collector.
pub trait CommandRunner: Send + Sync {
    /// Run `spec` to completion or until its timeout.
    fn run(&self, spec: &CommandSpec) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandSpec {
    /// Create a captured command.
    pub fn new<I, S>(program: impl Into<String>, args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout,
            interactive: false,
        }
    }

    /// Inherit the terminal instead of capturing output.
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Command line for logs and error messages.
    pub fn display_name(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            battery_status: CommandSpec::new("pmset", ["-g", "batt"], Duration::from_secs(2)),
            hardware_profile: CommandSpec::new(
                "system_profiler",
                ["SPPowerDataType"],
                Duration::from_secs(3),
            ),
            power_sampling: CommandSpec::new(
                "sudo",
                ["-n", "powermetrics", "-n", "1", "--samplers", "cpu_power"],
                Duration::from_secs(3),
            ),
            privilege_elevation: CommandSpec::new("sudo", ["-v"], Duration::from_secs(30))
                .interactive(),
        }
    }
}

impl CommandOutput {
    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl CommandRunner for SystemCommandRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let name = spec.display_name();
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).kill_on_drop(true);

        if spec.interactive {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());
        }

        let child = command
            .spawn()
            .map_err(|e| MonitorError::spawn_error(&name, e))?;

        // Dropping the pending wait on timeout kills the child.
        match time::timeout(spec.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                debug!(command = %name, status = ?output.status.code(), "command finished");
                Ok(CommandOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                })
            }
            Ok(Err(e)) => Err(MonitorError::Io(e)),
            Err(_) => {
                debug!(command = %name, timeout = ?spec.timeout, "command timed out, killed");
                Err(MonitorError::timeout_error(name, spec.timeout))
            }
        }
    }
}

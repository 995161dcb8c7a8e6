// Command runner seam and the shell-backed implementation
#![allow(dead_code)]

use crate::jxa::error::RunnerError;
use crate::jxa::types::RunOutput;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs one command line to completion or until its deadline
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str, timeout: Duration) -> Result<RunOutput, RunnerError>;
}

/// Runs commands through `<shell> -c`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("/bin/sh")
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, timeout: Duration) -> Result<RunOutput, RunnerError> {
        let start = Instant::now();

        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RunnerError::SpawnFailed(self.shell.clone(), e.to_string()))?;

        debug!(shell = %self.shell, pid = ?child.id(), "spawned command");

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    "command exceeded deadline, killed"
                );
                return Ok(RunOutput {
                    timed_out: true,
                    ..Default::default()
                });
            }
        };

        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            exit_code = output.status.code().unwrap_or(-1),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "command finished"
        );

        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
            timed_out: false,
        })
    }
}

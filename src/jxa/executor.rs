// JXA script executor
#![allow(dead_code)]

use crate::jxa::config::JxaConfig;
use crate::jxa::error::JxaError;
use crate::jxa::runner::{CommandRunner, ShellRunner};
use crate::jxa::script::build_application_script;
use crate::jxa::types::{ExecutionOptions, ExecutionResult, RunOutput};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Protect a script for use inside a single-quoted shell argument
pub fn shell_quote_protect(script: &str) -> String {
    script.replace('\'', "'\\''")
}

/// Build the interpreter command line for a trimmed script
pub fn build_command(interpreter: &str, script: &str) -> String {
    format!(
        "{} -l JavaScript -e '{}'",
        interpreter,
        shell_quote_protect(script)
    )
}

/// Pull `<details>` out of an `Error: <details>` message, else return it unchanged
pub fn extract_error_message(message: &str) -> String {
    match message.find("Error: ") {
        Some(pos) => {
            let rest = &message[pos + "Error: ".len()..];
            let details = rest.lines().next().unwrap_or("").trim();
            if details.is_empty() {
                message.trim().to_string()
            } else {
                details.to_string()
            }
        }
        None => message.trim().to_string(),
    }
}

/// Map a failed run to its error kind
fn classify_failure(output: &RunOutput, timeout_ms: u64) -> JxaError {
    if output.timed_out {
        return JxaError::Timeout(timeout_ms.div_ceil(1000));
    }
    classify_message(&output.stderr)
}

fn classify_message(message: &str) -> JxaError {
    if message.trim().is_empty() {
        JxaError::Unknown
    } else {
        JxaError::Interpreter(extract_error_message(message))
    }
}

/// Runs JXA scripts through the automation interpreter
pub struct JxaExecutor {
    config: JxaConfig,
    runner: Arc<dyn CommandRunner>,
}

impl JxaExecutor {
    /// Executor backed by a shell runner built from `config`
    pub fn new(config: JxaConfig) -> Self {
        let runner = Arc::new(ShellRunner::new(config.shell.clone())) as Arc<dyn CommandRunner>;
        Self::with_runner(config, runner)
    }

    /// Executor with a caller-supplied runner
    pub fn with_runner(config: JxaConfig, runner: Arc<dyn CommandRunner>) -> Self {
        debug!(
            interpreter = %config.interpreter,
            default_timeout_ms = config.default_timeout_ms,
            "initializing jxa executor"
        );
        Self { config, runner }
    }

    pub fn config(&self) -> &JxaConfig {
        &self.config
    }

    fn effective_timeout_ms(&self, options: Option<ExecutionOptions>) -> u64 {
        match options {
            Some(opts) if opts.timeout_ms > 0 => opts.timeout_ms,
            Some(_) => {
                warn!(
                    default_timeout_ms = self.config.default_timeout_ms,
                    "timeout_ms must be positive, using default"
                );
                self.config.default_timeout_ms
            }
            None => self.config.default_timeout_ms,
        }
    }

    /// Execute a script. Every failure is folded into the returned result.
    pub async fn execute(&self, script: &str, options: Option<ExecutionOptions>) -> ExecutionResult {
        let script = script.trim();
        if script.is_empty() {
            debug!("rejecting empty script");
            return JxaError::EmptyScript.into();
        }

        let timeout_ms = self.effective_timeout_ms(options);
        let command = build_command(&self.config.interpreter, script);

        debug!(
            script_bytes = script.len(),
            timeout_ms = timeout_ms,
            "executing jxa script"
        );

        let start = Instant::now();
        let run = self
            .runner
            .run(&command, Duration::from_millis(timeout_ms))
            .await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let result = match run {
            Ok(output) if output.success() => ExecutionResult::success(output.stdout.trim()),
            Ok(output) => classify_failure(&output, timeout_ms).into(),
            Err(e) => classify_message(&e.to_string()).into(),
        };

        info!(
            duration_ms = duration_ms,
            success = result.success,
            output_bytes = result.output.len(),
            error = result.error.as_deref().unwrap_or(""),
            "jxa script executed"
        );

        result
    }

    /// Wrap a fragment with the Notes application binding, then execute it
    pub async fn execute_in_notes(
        &self,
        fragment: &str,
        options: Option<ExecutionOptions>,
    ) -> ExecutionResult {
        self.execute(&build_application_script(fragment), options).await
    }
}

impl Default for JxaExecutor {
    fn default() -> Self {
        Self::new(JxaConfig::default())
    }
}

// Data types for JXA module
#![allow(dead_code)]

use crate::jxa::error::JxaError;
use serde::{Deserialize, Serialize};

/// Default wall-clock limit for one interpreter run
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Outcome of one script execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the interpreter completed normally
    pub success: bool,
    /// Trimmed stdout (empty on failure)
    #[serde(default)]
    pub output: String,
    /// Human-readable failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.into()),
        }
    }

    /// Convert into a `Result` of output or error message
    pub fn into_result(self) -> std::result::Result<String, String> {
        if self.success {
            Ok(self.output)
        } else {
            Err(self.error.unwrap_or_else(|| JxaError::Unknown.to_string()))
        }
    }
}

impl From<JxaError> for ExecutionResult {
    fn from(err: JxaError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Per-call execution options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOptions {
    /// Maximum duration before the interpreter is killed
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ExecutionOptions {
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Raw result of running one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    /// None when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Set when the runner killed the process at its deadline
    pub timed_out: bool,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

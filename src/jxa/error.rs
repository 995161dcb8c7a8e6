// Error types for JXA module

use thiserror::Error;

/// Failure kinds surfaced by the executor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JxaError {
    #[error("No script provided: script is empty")]
    EmptyScript,

    #[error("Script execution timed out after {0} seconds")]
    Timeout(u64),

    #[error("{0}")]
    Interpreter(String),

    #[error("Script execution failed with unknown error")]
    Unknown,
}

/// Errors from the command runner itself (the process never produced a result)
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to spawn '{0}': {1}")]
    SpawnFailed(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{0}': {1}")]
    Read(String, std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

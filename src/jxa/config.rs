// JXA executor configuration
#![allow(dead_code)]

use crate::jxa::error::ConfigError;
use crate::jxa::types::DEFAULT_TIMEOUT_MS;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Executor configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JxaConfig {
    /// Shell used to run the interpreter command line
    pub shell: String,
    /// Automation interpreter binary
    pub interpreter: String,
    /// Timeout applied when a call passes none (or zero)
    pub default_timeout_ms: u64,
}

impl Default for JxaConfig {
    fn default() -> Self {
        Self {
            shell: String::from("/bin/sh"),
            interpreter: String::from("osascript"),
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Parse an environment variable, logging a warning if the value is present but invalid.
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(v) => match v.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %v, "Invalid env var value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

impl JxaConfig {
    /// `~/.notes-jxa/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".notes-jxa").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".notes-jxa/config.toml"))
    }

    /// Load from a TOML file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.display().to_string(), e))?;
        let config = Self::from_toml(&content)?;

        debug!(
            path = %path.display(),
            interpreter = %config.interpreter,
            default_timeout_ms = config.default_timeout_ms,
            "loaded config file"
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Override fields from `NOTES_JXA_*` environment variables (and `.env`)
    pub fn apply_env(mut self) -> Self {
        dotenvy::dotenv().ok();

        self.shell = parse_env_var("NOTES_JXA_SHELL", self.shell);
        self.interpreter = parse_env_var("NOTES_JXA_INTERPRETER", self.interpreter);
        self.default_timeout_ms = parse_env_var("NOTES_JXA_TIMEOUT_MS", self.default_timeout_ms);

        self
    }
}

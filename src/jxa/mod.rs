// JXA module - escaping, script composition and osascript execution
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod escape;
pub mod executor;
pub mod runner;
pub mod script;
pub mod types;

pub use config::JxaConfig;
pub use error::{ConfigError, JxaError, RunnerError};
pub use escape::{escape, escape_str};
pub use executor::JxaExecutor;
pub use runner::{CommandRunner, ShellRunner};
pub use script::{build_application_script, build_application_script_for};
pub use types::{DEFAULT_TIMEOUT_MS, ExecutionOptions, ExecutionResult, RunOutput};

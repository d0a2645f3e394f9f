use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading launcher settings from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to collect or deserialize `CANTEEN_*` variables.
    #[error("Failed to read launcher settings from the environment")]
    Load {
        #[source]
        source: ConfigLoaderError,
    },
    /// A `CANTEEN_*` variable holds bytes that are not valid Unicode.
    #[error("Environment variable `{variable}` is not valid Unicode")]
    NonUnicodeValue { variable: String },
    /// Field failed validation.
    #[error("Environment variable `{variable}` is invalid: {message}")]
    InvalidField {
        variable: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a load failure.
    pub fn from_load_error(source: ConfigLoaderError) -> Self {
        Self::Load { source }
    }
}

/// Reasons a Java executable could not be located.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Strict mode: nothing named `java` on the search path.
    #[error("Java not found in PATH")]
    NotInSearchPath,
    /// Search path miss and no fallback location.
    #[error("Java not found in PATH and JAVA_HOME not set")]
    JavaHomeUnset,
    /// `JAVA_HOME` is set but cannot be inspected.
    #[error("Java not found in JAVA_HOME {path}")]
    JavaHomeUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `JAVA_HOME` points at something other than a directory.
    #[error("JAVA_HOME is not a directory: {path}")]
    JavaHomeNotDirectory { path: PathBuf },
}

/// Failures while handing control to the Java executable.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Bootstrap execution error: failed to replace process with {program}")]
    Replace {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Bootstrap execution error: failed to start {program}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Bootstrap execution error: failed to wait for {program}")]
    Wait {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Bootstrap execution error: {program} terminated without an exit code ({status})")]
    AbnormalTermination { program: PathBuf, status: String },
}

/// Top-level failure of a single launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Bootstrap execution error: the operating system supplied no program name")]
    MissingSelfPath,
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

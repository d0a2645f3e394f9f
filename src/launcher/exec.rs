//! Hand control to the Java runtime.

use std::process::Stdio;

use tracing::debug;
#[cfg(not(unix))]
use tracing::warn;

use crate::lib::errors::ExecutionError;

use super::invocation::Invocation;

/// How the Java process takes over from the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// Replace the launcher's process image. Unix only.
    Replace,
    /// Run Java as a child and exit with its status.
    Spawn,
}

impl ExecMode {
    pub const fn platform_default() -> Self {
        if cfg!(unix) {
            ExecMode::Replace
        } else {
            ExecMode::Spawn
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ExecMode::Replace => "replace",
            ExecMode::Spawn => "spawn",
        }
    }

    /// Parse `replace` or `spawn`, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [ExecMode::Replace, ExecMode::Spawn]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
    }
}

/// Run `invocation` and return the exit code the launcher must exit with.
///
/// In `Replace` mode this only returns on failure.
pub fn execute(invocation: &Invocation, mode: ExecMode) -> Result<i32, ExecutionError> {
    match mode {
        ExecMode::Replace => replace(invocation),
        ExecMode::Spawn => spawn_and_wait(invocation),
    }
}

#[cfg(unix)]
fn replace(invocation: &Invocation) -> Result<i32, ExecutionError> {
    use std::os::unix::process::CommandExt;

    let source = invocation.to_command().exec();
    Err(ExecutionError::Replace {
        program: invocation.program().to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn replace(invocation: &Invocation) -> Result<i32, ExecutionError> {
    warn!(
        target: "canteen::exec",
        "Process replacement is unavailable on this platform; spawning instead"
    );
    spawn_and_wait(invocation)
}

fn spawn_and_wait(invocation: &Invocation) -> Result<i32, ExecutionError> {
    let program = invocation.program().to_path_buf();
    let mut child = invocation
        .to_command()
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ExecutionError::Spawn {
            program: program.clone(),
            source,
        })?;
    debug!(
        target: "canteen::exec",
        pid = child.id(),
        program = %program.display(),
        "Started Java child process"
    );

    let status = child.wait().map_err(|source| ExecutionError::Wait {
        program: program.clone(),
        source,
    })?;

    match status.code() {
        Some(code) => {
            debug!(target: "canteen::exec", exit_code = code, "Java child process exited");
            Ok(code)
        }
        None => {
            debug!(
                target: "canteen::exec",
                status = %status,
                "Java child process terminated without an exit code"
            );
            Err(ExecutionError::AbnormalTermination {
                program,
                status: status.to_string(),
            })
        }
    }
}

//! Resolve a Java runtime and re-launch this executable as `java -jar`.
mod exec;
mod exit;
mod invocation;
mod resolve;

use std::ffi::OsString;

pub use exec::{execute, ExecMode};
pub use exit::{RuntimeExit, BOOTSTRAP_FAILURE_CODE};
pub use invocation::{Invocation, JAR_FLAG, JAVA_ARG0};
pub use resolve::{
    resolve_java_runtime, resolve_java_runtime_from, JavaRuntime, RuntimeSource, JAVA_EXECUTABLE,
    JAVA_HOME_ENV,
};

use crate::{
    config::LauncherConfig,
    lib::{
        errors::LaunchError,
        telemetry::{emit_launch, LaunchTelemetry},
    },
};

/// Single-shot launcher: resolve, build, run.
#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Resolve Java and build the invocation for `argv` without running it.
    ///
    /// `argv[0]` is the path this program was started by; the rest is forwarded.
    pub fn prepare<I>(&self, argv: I) -> Result<(Invocation, RuntimeSource), LaunchError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let self_path = argv.next().ok_or(LaunchError::MissingSelfPath)?;
        let runtime = resolve_java_runtime(self.config.java_home_fallback)?;
        Ok((
            Invocation::new(runtime.path, &self_path, argv),
            runtime.source,
        ))
    }

    /// Run Java for `argv` and return the exit status to terminate with.
    ///
    /// With [`ExecMode::Replace`] a successful launch never returns.
    pub fn run<I>(&self, argv: I) -> Result<i32, LaunchError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let (invocation, source) = self.prepare(argv)?;
        emit_launch(&LaunchTelemetry {
            program: invocation.program(),
            source: source.as_str(),
            exec_mode: self.config.exec_mode.as_str(),
            jar: invocation.jar(),
            forwarded_args: invocation.forwarded().len(),
        });

        Ok(execute(&invocation, self.config.exec_mode)?)
    }
}

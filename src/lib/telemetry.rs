//! Telemetry initialization and launch event helpers.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the launcher's `EnvFilter` directive.
pub const LOG_ENV: &str = "CANTEEN_LOG";
/// Filter used when `CANTEEN_LOG` is unset. Keeps successful runs silent.
const DEFAULT_FILTER: &str = "warn";

/// Initialize `tracing` and send launcher diagnostics to stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload describing the process about to be started.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub program: &'a std::path::Path,
    pub source: &'a str,
    pub exec_mode: &'a str,
    pub jar: &'a std::ffi::OsStr,
    pub forwarded_args: usize,
}

/// Emit the resolved launch to `tracing`.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    debug!(
        target: "canteen::launcher",
        program = %telemetry.program.display(),
        source = telemetry.source,
        exec_mode = telemetry.exec_mode,
        jar = ?telemetry.jar,
        forwarded_args = telemetry.forwarded_args,
        "Launching Java runtime"
    );
}

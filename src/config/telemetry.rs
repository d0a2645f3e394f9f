use tracing::debug;

use super::{LauncherConfig, ENV_PREFIX};

pub fn log_loaded(config: &LauncherConfig) {
    debug!(
        target: "canteen::config",
        prefix = ENV_PREFIX,
        java_home_fallback = config.java_home_fallback,
        exec_mode = config.exec_mode.as_str(),
        "Launcher settings loaded"
    );
}

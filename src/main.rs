//! Entry point for the Canteen bootstrap launcher.
use std::{env, process};

use canteen_bootstrap::{
    config::LauncherConfig,
    launcher::{Launcher, RuntimeExit},
    lib::telemetry,
};

fn main() {
    let code = match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    };
    process::exit(code);
}

fn bootstrap() -> Result<i32, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let config = LauncherConfig::load_from_env().map_err(RuntimeExit::from_error)?;
    Launcher::new(config)
        .run(env::args_os())
        .map_err(RuntimeExit::from_error)
}

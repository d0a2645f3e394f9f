//! Load and validate launcher settings from `CANTEEN_*` environment variables.
use std::{collections::HashMap, env, ffi::OsString};

use serde::Deserialize;
use tracing::debug;

use crate::{launcher::ExecMode, lib::errors::ConfigError};

pub mod telemetry;

/// Prefix shared by every launcher setting.
pub const ENV_PREFIX: &str = "CANTEEN";
const ENV_KEY_PREFIX: &str = "CANTEEN_";
pub const JAVA_HOME_FALLBACK_ENV: &str = "CANTEEN_JAVA_HOME_FALLBACK";
pub const EXEC_MODE_ENV: &str = "CANTEEN_EXEC_MODE";

/// Resolved launcher settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Consult `JAVA_HOME` when `java` is missing from the search path.
    pub java_home_fallback: bool,
    pub exec_mode: ExecMode,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            java_home_fallback: true,
            exec_mode: ExecMode::platform_default(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct RawLauncherConfig {
    java_home_fallback: Option<bool>,
    exec_mode: Option<String>,
}

impl LauncherConfig {
    /// Read settings from the process environment.
    ///
    /// Variables outside the `CANTEEN_` prefix are never decoded, so they may
    /// hold arbitrary bytes.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        Self::load(Some(collect_prefixed_vars(env::vars_os())?))
    }

    /// Read settings from an explicit variable map instead of the process environment.
    pub fn load_from_map(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let source = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(vars);
        let document = config::Config::builder()
            .add_source(source)
            .build()
            .map_err(ConfigError::from_load_error)?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            debug!(
                target: "canteen::config",
                reason = %err,
                "Failed to parse launcher settings"
            );
            ConfigError::from_load_error(err)
        })?;

        let config = Self::from_raw(raw).map_err(|err| {
            debug!(
                target: "canteen::config",
                reason = %err,
                "Failed to validate launcher settings"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let exec_mode = match raw.exec_mode {
            Some(value) => parse_exec_mode(&value)?,
            None => defaults.exec_mode,
        };

        Ok(Self {
            java_home_fallback: raw.java_home_fallback.unwrap_or(defaults.java_home_fallback),
            exec_mode,
        })
    }
}

/// Keep the `CANTEEN_*` entries of `vars`, rejecting values that are not Unicode.
fn collect_prefixed_vars<I>(vars: I) -> Result<HashMap<String, String>, ConfigError>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut collected = HashMap::new();
    for (key, value) in vars {
        let Some(key) = key.to_str().filter(|key| key.starts_with(ENV_KEY_PREFIX)) else {
            continue;
        };
        let value = value
            .into_string()
            .map_err(|_| ConfigError::NonUnicodeValue {
                variable: key.to_string(),
            })?;
        collected.insert(key.to_string(), value);
    }
    Ok(collected)
}

fn parse_exec_mode(value: &str) -> Result<ExecMode, ConfigError> {
    ExecMode::from_name(value.trim()).ok_or_else(|| ConfigError::InvalidField {
        variable: EXEC_MODE_ENV,
        message: format!("expected `replace` or `spawn`, got `{value}`"),
    })
}

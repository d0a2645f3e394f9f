//! Locate the Java executable: search path first, then `JAVA_HOME`.

use std::{
    env,
    ffi::{OsStr, OsString},
    fs,
    path::PathBuf,
};

use tracing::debug;

use crate::lib::{
    errors::ResolutionError,
    paths::{find_executable_in, platform_executable_name},
};

pub const JAVA_EXECUTABLE: &str = "java";
pub const JAVA_HOME_ENV: &str = "JAVA_HOME";
const SEARCH_PATH_ENV: &str = "PATH";
const JAVA_HOME_BIN_DIR: &str = "bin";

/// Where the Java executable was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeSource {
    SearchPath,
    JavaHome,
}

impl RuntimeSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RuntimeSource::SearchPath => "path",
            RuntimeSource::JavaHome => "java_home",
        }
    }
}

/// A resolved Java executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRuntime {
    pub path: PathBuf,
    pub source: RuntimeSource,
}

/// Resolve `java` from the process environment.
pub fn resolve_java_runtime(java_home_fallback: bool) -> Result<JavaRuntime, ResolutionError> {
    resolve_java_runtime_from(
        env::var_os(SEARCH_PATH_ENV),
        env::var_os(JAVA_HOME_ENV),
        java_home_fallback,
    )
}

/// Resolve `java` from explicit environment values (testable helper).
pub fn resolve_java_runtime_from(
    search_path: Option<OsString>,
    java_home: Option<OsString>,
    java_home_fallback: bool,
) -> Result<JavaRuntime, ResolutionError> {
    if let Some(path) = search_path
        .as_deref()
        .and_then(|search_path| find_executable_in(JAVA_EXECUTABLE, search_path))
    {
        debug!(
            target: "canteen::resolve",
            path = %path.display(),
            "Found java on the search path"
        );
        return Ok(JavaRuntime {
            path,
            source: RuntimeSource::SearchPath,
        });
    }

    if !java_home_fallback {
        return Err(ResolutionError::NotInSearchPath);
    }

    let java_home = java_home.ok_or(ResolutionError::JavaHomeUnset)?;
    let path = java_from_home(&java_home)?;
    debug!(
        target: "canteen::resolve",
        java_home = ?java_home,
        path = %path.display(),
        "java missing from the search path; using JAVA_HOME"
    );
    Ok(JavaRuntime {
        path,
        source: RuntimeSource::JavaHome,
    })
}

/// `<java_home>/bin/java`, once `java_home` is known to be a directory.
fn java_from_home(java_home: &OsStr) -> Result<PathBuf, ResolutionError> {
    let home = PathBuf::from(java_home);
    let metadata = fs::metadata(&home).map_err(|source| ResolutionError::JavaHomeUnreadable {
        path: home.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ResolutionError::JavaHomeNotDirectory { path: home });
    }

    Ok(home
        .join(JAVA_HOME_BIN_DIR)
        .join(platform_executable_name(JAVA_EXECUTABLE)))
}

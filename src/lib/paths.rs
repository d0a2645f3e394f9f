//! Path helpers shared by runtime resolution and invocation building.

use std::{
    env,
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
};

/// Prefix removed from the program name before it is handed to `java -jar`.
const CURRENT_DIR_PREFIX: &str = "./";
/// Extensions tried on Windows when `PATHEXT` is unset.
#[cfg(windows)]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// Remove exactly one leading `./` from `path`.
///
/// No other normalization happens: symlinks are not followed and the result
/// is not made absolute.
#[cfg(unix)]
pub fn strip_current_dir_prefix(path: &OsStr) -> &OsStr {
    use std::os::unix::ffi::OsStrExt;

    path.as_bytes()
        .strip_prefix(CURRENT_DIR_PREFIX.as_bytes())
        .map(OsStr::from_bytes)
        .unwrap_or(path)
}

/// Remove exactly one leading `./` from `path`.
///
/// Names that are not valid Unicode are returned unchanged.
#[cfg(not(unix))]
pub fn strip_current_dir_prefix(path: &OsStr) -> &OsStr {
    match path.to_str() {
        Some(text) => text
            .strip_prefix(CURRENT_DIR_PREFIX)
            .map(OsStr::new)
            .unwrap_or(path),
        None => path,
    }
}

/// Returns true if `path` is a regular file the current platform would run.
pub fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// File names tried for `name` in each search path directory.
#[cfg(not(windows))]
pub fn executable_file_names(name: &str) -> Vec<OsString> {
    vec![OsString::from(name)]
}

/// File names tried for `name` in each search path directory.
#[cfg(windows)]
pub fn executable_file_names(name: &str) -> Vec<OsString> {
    let extensions = env::var("PATHEXT").unwrap_or_else(|_| DEFAULT_PATHEXT.to_string());
    extensions
        .split(';')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| OsString::from(format!("{name}{}", ext.to_ascii_lowercase())))
        .collect()
}

/// Name of `program` inside an installation's `bin` directory.
pub fn platform_executable_name(program: &str) -> String {
    format!("{program}{}", env::consts::EXE_SUFFIX)
}

/// Scan `search_path` (a `PATH`-style list) for an executable called `name`.
///
/// Empty and relative entries are skipped so the current directory is never
/// searched implicitly.
pub fn find_executable_in(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    let file_names = executable_file_names(name);
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty() && dir.is_absolute())
        .flat_map(|dir| {
            file_names
                .iter()
                .map(move |file_name| dir.join(file_name))
                .collect::<Vec<_>>()
        })
        .find(|candidate| is_executable_file(candidate))
}

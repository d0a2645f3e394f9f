use crate::{cmd::preflight::run_step, repo};
use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Status the stub `java` exits with; the launcher must report it unchanged.
const STUB_EXIT_CODE: i32 = 42;
const BOOTSTRAP_FAILURE_CODE: i32 = 1;

struct Case {
    label: &'static str,
    search_path: PathBuf,
    java_home: Option<PathBuf>,
    exec_mode: Option<&'static str>,
    expected: i32,
}

pub fn run(skip_build: bool) -> Result<()> {
    let root = repo::repo_root()?;
    if !skip_build {
        run_step(
            &root,
            "cargo build --release -p canteen-bootstrap",
            &["build", "--release", "-p", "canteen-bootstrap"],
        )?;
    }

    let launcher = repo::release_launcher(&root);
    if !launcher.is_file() {
        bail!("launcher binary not found at {}", launcher.display());
    }

    let temp = tempfile::tempdir().context("failed to create temporary directory")?;
    let path_bin = temp.path().join("path-bin");
    let empty_bin = temp.path().join("empty-bin");
    let jdk = temp.path().join("jdk");
    fs::create_dir_all(&empty_bin)?;
    write_stub_java(&path_bin)?;
    write_stub_java(&jdk.join("bin"))?;

    let cases = [
        Case {
            label: "java on PATH",
            search_path: path_bin.clone(),
            java_home: None,
            exec_mode: None,
            expected: STUB_EXIT_CODE,
        },
        Case {
            label: "JAVA_HOME fallback",
            search_path: empty_bin.clone(),
            java_home: Some(jdk),
            exec_mode: None,
            expected: STUB_EXIT_CODE,
        },
        Case {
            label: "spawn mode",
            search_path: path_bin,
            java_home: None,
            exec_mode: Some("spawn"),
            expected: STUB_EXIT_CODE,
        },
        Case {
            label: "no java anywhere",
            search_path: empty_bin,
            java_home: None,
            exec_mode: None,
            expected: BOOTSTRAP_FAILURE_CODE,
        },
    ];

    for case in &cases {
        run_case(&launcher, case)?;
    }
    eprintln!("==> smoke: {} cases passed", cases.len());
    Ok(())
}

fn run_case(launcher: &Path, case: &Case) -> Result<()> {
    let mut command = Command::new(launcher);
    command
        .arg("smoke")
        .env_clear()
        .env("PATH", &case.search_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    if let Some(java_home) = &case.java_home {
        command.env("JAVA_HOME", java_home);
    }
    if let Some(mode) = case.exec_mode {
        command.env("CANTEEN_EXEC_MODE", mode);
    }

    let status = command
        .status()
        .with_context(|| format!("failed to run launcher for `{}`", case.label))?;
    if status.code() != Some(case.expected) {
        bail!(
            "smoke `{}`: expected exit code {}, got {status}",
            case.label,
            case.expected
        );
    }
    eprintln!("==> smoke `{}`: ok", case.label);
    Ok(())
}

#[cfg(unix)]
fn write_stub_java(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir)?;
    let path = dir.join("java");
    fs::write(&path, format!("#!/bin/sh\nexit {STUB_EXIT_CODE}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn write_stub_java(_dir: &Path) -> Result<()> {
    bail!("the smoke check needs a POSIX shell for its stub java")
}

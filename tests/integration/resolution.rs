use std::fs;

use anyhow::Result;

use crate::common::{
    assert_single_diagnostic, launcher, run, stderr_of, stdout_of, StubJdk, BOOTSTRAP_FAILURE,
};

#[test]
fn search_path_takes_precedence_over_java_home() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_on_path("echo path")?;
    jdk.install_in_java_home("echo home")?;

    let output = run(launcher(&jdk.path_dir()).env("JAVA_HOME", jdk.java_home()))?;

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(stdout_of(&output), "path\n");
    Ok(())
}

#[test]
fn java_home_is_used_when_search_path_misses() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_in_java_home("echo home\nexit 3")?;

    let output = run(launcher(&jdk.empty_dir()).env("JAVA_HOME", jdk.java_home()))?;

    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "home\n");
    Ok(())
}

#[test]
fn unset_java_home_fails_without_spawning() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_in_java_home(&jdk.touch_marker())?;

    let output = run(&mut launcher(&jdk.empty_dir()))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    assert_single_diagnostic(&output, "Java not found in PATH and JAVA_HOME not set");
    assert!(!jdk.marker().exists(), "no process may be started");
    Ok(())
}

#[test]
fn java_home_file_fails_without_spawning() -> Result<()> {
    let jdk = StubJdk::new()?;
    let release = jdk.java_home().join("release");
    fs::write(&release, "JAVA_VERSION=\"21\"")?;

    let output = run(launcher(&jdk.empty_dir()).env("JAVA_HOME", &release))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("JAVA_HOME is not a directory"), "stderr: {stderr}");
    assert!(stdout_of(&output).is_empty());
    Ok(())
}

#[test]
fn missing_java_home_directory_is_reported() -> Result<()> {
    let jdk = StubJdk::new()?;

    let output = run(launcher(&jdk.empty_dir()).env("JAVA_HOME", jdk.java_home().join("gone")))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Java not found in JAVA_HOME"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn strict_mode_never_consults_java_home() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_in_java_home(&jdk.touch_marker())?;

    let output = run(launcher(&jdk.empty_dir())
        .env("JAVA_HOME", jdk.java_home())
        .env("CANTEEN_JAVA_HOME_FALLBACK", "false"))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Java not found in PATH"), "stderr: {stderr}");
    assert!(!jdk.marker().exists(), "no process may be started");
    Ok(())
}

#[test]
fn invalid_setting_aborts_before_resolution() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_on_path(&jdk.touch_marker())?;

    let output = run(launcher(&jdk.path_dir()).env("CANTEEN_EXEC_MODE", "fork"))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    assert_single_diagnostic(&output, "CANTEEN_EXEC_MODE");
    assert!(!jdk.marker().exists(), "no process may be started");
    Ok(())
}

#[test]
fn relative_java_home_resolves_against_working_directory() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_in_java_home("echo relative-home\nexit 5")?;

    let output = run(launcher(&jdk.empty_dir())
        .current_dir(jdk.root())
        .env("JAVA_HOME", "jdk"))?;

    assert_eq!(output.status.code(), Some(5), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "relative-home\n");
    Ok(())
}

#[test]
fn non_unicode_setting_is_a_bootstrap_failure() -> Result<()> {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let jdk = StubJdk::new()?;
    jdk.install_on_path(&jdk.touch_marker())?;

    let output =
        run(launcher(&jdk.path_dir()).env("CANTEEN_EXEC_MODE", OsStr::from_bytes(b"sp\xffawn")))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    assert_single_diagnostic(&output, "CANTEEN_EXEC_MODE");
    assert!(!jdk.marker().exists(), "no process may be started");
    Ok(())
}

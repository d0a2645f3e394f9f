use anyhow::Result;

use crate::common::{
    assert_single_diagnostic, launcher, run, stderr_of, stdout_of, StubJdk, BOOTSTRAP_FAILURE,
};

#[test]
fn spawn_mode_propagates_exit_status_and_streams() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_on_path("echo success\necho failure >&2\nexit 42")?;

    let output = run(launcher(&jdk.path_dir()).env("CANTEEN_EXEC_MODE", "spawn"))?;

    assert_eq!(output.status.code(), Some(42));
    assert_eq!(stdout_of(&output), "success\n");
    assert_eq!(stderr_of(&output), "failure\n");
    Ok(())
}

#[test]
fn spawn_mode_treats_signal_death_as_bootstrap_failure() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_on_path("kill -9 $$")?;

    let output = run(launcher(&jdk.path_dir()).env("CANTEEN_EXEC_MODE", "spawn"))?;

    assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE));
    assert_single_diagnostic(&output, "terminated without an exit code");
    Ok(())
}

#[test]
fn missing_java_home_binary_is_an_execution_error() -> Result<()> {
    let jdk = StubJdk::new()?;

    for mode in ["replace", "spawn"] {
        let output = run(launcher(&jdk.empty_dir())
            .env("JAVA_HOME", jdk.java_home())
            .env("CANTEEN_EXEC_MODE", mode))?;

        assert_eq!(output.status.code(), Some(BOOTSTRAP_FAILURE), "mode {mode}");
        let stderr = stderr_of(&output);
        assert!(
            stderr.contains("Bootstrap execution error"),
            "mode {mode}, stderr: {stderr}"
        );
    }
    Ok(())
}

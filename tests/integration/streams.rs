use std::{io::Write, process::Stdio};

use anyhow::{Context, Result};

use crate::common::{launcher, run, stderr_of, stdout_of, StubJdk};

#[test]
fn stdout_and_stderr_pass_through_verbatim() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_on_path("echo hello\necho world >&2")?;

    let output = run(&mut launcher(&jdk.path_dir()))?;

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(stdout_of(&output), "hello\n");
    assert_eq!(stderr_of(&output), "world\n");
    Ok(())
}

#[test]
fn stdin_reaches_java() -> Result<()> {
    let jdk = StubJdk::new()?;
    jdk.install_on_path("read choice\necho \"choice=$choice\"")?;

    let mut child = launcher(&jdk.path_dir())
        .stdin(Stdio::piped())
        .spawn()
        .context("failed to spawn launcher")?;
    child
        .stdin
        .take()
        .context("launcher stdin")?
        .write_all(b"1\n")
        .context("failed to write to launcher stdin")?;
    let output = child.wait_with_output().context("failed to wait for launcher")?;

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(stdout_of(&output), "choice=1\n");
    Ok(())
}

//! The `java -jar <self> <args...>` command line.

use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::Command,
};

use crate::lib::paths::strip_current_dir_prefix;

/// Flag telling the Java runtime to run the following path as a jar.
pub const JAR_FLAG: &str = "-jar";
/// argv[0] seen by the Java process.
pub const JAVA_ARG0: &str = "java";

/// Program and arguments of a single Java launch. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl Invocation {
    /// Build `<program> -jar <self_path> <forwarded...>`.
    ///
    /// One leading `./` is removed from `self_path`; `forwarded` is kept as is.
    pub fn new<I>(program: PathBuf, self_path: &OsStr, forwarded: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = vec![
            OsString::from(JAR_FLAG),
            strip_current_dir_prefix(self_path).to_os_string(),
        ];
        args.extend(forwarded);
        Self { program, args }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list after the program name.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Path handed to `-jar`.
    pub fn jar(&self) -> &OsStr {
        &self.args[1]
    }

    /// Arguments passed through from the launcher's own command line.
    pub fn forwarded(&self) -> &[OsString] {
        &self.args[2..]
    }

    /// Build a `Command` for this invocation with the environment inherited.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(JAVA_ARG0);
        }
        command.args(&self.args);
        command
    }
}

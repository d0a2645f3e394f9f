use anyhow::Error;

/// Exit status used for every failure of the launcher itself.
pub const BOOTSTRAP_FAILURE_CODE: i32 = 1;

/// Bundles a fatal diagnostic with the status the launcher exits with.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: i32,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: BOOTSTRAP_FAILURE_CODE,
        }
    }

    /// Write the diagnostic to stderr and hand back the exit status.
    pub fn report(self) -> i32 {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

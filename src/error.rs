use std::path::PathBuf;

use thiserror::Error;

use cph_lang::ExecutionError;

/// The errors of the user-triggered operations.
///
/// Each one is caught at the top level of the operation and rendered as a single readable
/// message; none of them crashes the process. A failed comparison is not part of the taxonomy:
/// it is a normal result (see [`TestReport`](../report/struct.TestReport.html)).
#[derive(Debug, Error)]
pub enum CphError {
    /// The problem URL does not match the judge's problem-page pattern. Checked before any side
    /// effect.
    #[error("invalid problem URL: {0}")]
    InvalidInput(String),
    /// `inputs.txt` or `outputs.txt` is nowhere under the workspace root. Raised before any
    /// execution attempt.
    #[error("{name} not found under {root:?}, fetch the test cases first")]
    MissingWorkspaceFile {
        /// The name of the missing file.
        name: &'static str,
        /// The workspace root that has been searched.
        root: PathBuf,
    },
    /// The requested language, or the extension of the solution file, is not in the registry.
    /// Raised before any process is spawned.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    /// The solution (or its compilation) failed: non-zero exit status or stderr output. The
    /// detail is the stderr text.
    #[error(transparent)]
    ExecutionFailure(#[from] ExecutionError),
}

/// Print the message of an error, with the chain of causes.
fn print_error(error: anyhow::Error) {
    debug!("{:?}", error);
    let mut fail: &dyn std::error::Error = error.as_ref();
    eprintln!("Error: {fail}");
    while let Some(cause) = fail.source() {
        eprintln!("\nCaused by:\n    {cause}");
        fail = cause;
    }
}

/// Adds methods for failing without panic. Like `expect` but without panic.
pub trait NiceError<T> {
    /// Fail exiting with `1` if the value is not present. Otherwise return the content.
    fn nice_unwrap(self) -> T;
}

impl<T> NiceError<T> for Result<T, anyhow::Error> {
    fn nice_unwrap(self) -> T {
        match self {
            Ok(x) => x,
            Err(e) => {
                print_error(e);
                std::process::exit(1);
            }
        }
    }
}

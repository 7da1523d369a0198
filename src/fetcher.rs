use std::path::Path;
use std::process::Command;

use anyhow::{bail, ensure, Context, Error};
use regex::Regex;

use crate::error::CphError;

/// Environment variable naming the external fetcher command.
pub const FETCHER_ENV: &str = "CPH_FETCHER";

lazy_static::lazy_static! {
    /// Pattern of the problem pages of the supported judge.
    static ref PROBLEM_URL: Regex =
        Regex::new(r"^(https?://)(www\.)?leetcode\.com/problems/[a-zA-Z0-9-]+(/.*)?$").unwrap();
}

/// Check that `url` points to a problem page of the supported judge.
///
/// This runs before any side effect of the fetch operation.
pub fn validate_problem_url(url: &str) -> Result<(), Error> {
    if !PROBLEM_URL.is_match(url) {
        bail!(CphError::InvalidInput(url.to_string()));
    }
    Ok(())
}

/// The external collaborator that retrieves the sample test case of a problem.
///
/// Implementations must either deposit `inputs.txt` and `outputs.txt` somewhere under the
/// workspace root and return `Ok`, or fail with a human-readable message. The files are assumed
/// to be plain UTF-8 text with one test case's worth of content each.
pub trait Fetcher {
    /// Retrieve the sample test case of `url`, depositing the files under `workspace`.
    fn fetch(&self, url: &str, workspace: &Path) -> Result<(), Error>;
}

/// A [`Fetcher`](trait.Fetcher.html) that runs a user-configured external command, invoked as
/// `<command> <url> <workspace>`.
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    /// The command and its leading arguments.
    command: Vec<String>,
}

impl CommandFetcher {
    /// Make a new `CommandFetcher` from a command line.
    pub fn new<S: AsRef<str>>(command_line: S) -> Result<CommandFetcher, Error> {
        let command =
            shell_words::split(command_line.as_ref()).context("Invalid fetcher command line")?;
        ensure!(!command.is_empty(), "The fetcher command line is empty");
        Ok(CommandFetcher { command })
    }

    /// Make a new `CommandFetcher` from `$CPH_FETCHER`, if set.
    pub fn from_env() -> Result<Option<CommandFetcher>, Error> {
        match std::env::var(FETCHER_ENV) {
            Ok(command_line) => Ok(Some(CommandFetcher::new(command_line)?)),
            Err(_) => Ok(None),
        }
    }
}

impl Fetcher for CommandFetcher {
    fn fetch(&self, url: &str, workspace: &Path) -> Result<(), Error> {
        info!("Fetching the test cases of {} with {:?}", url, self.command);
        let output = Command::new(&self.command[0])
            .args(&self.command[1..])
            .arg(url)
            .arg(workspace)
            .output()
            .with_context(|| format!("Failed to run the fetcher {:?}", self.command[0]))?;
        if !output.status.success() {
            bail!(
                "The fetcher exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

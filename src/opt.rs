use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// The command line options of the `cph` binary.
#[derive(Parser, Debug)]
#[command(name = "cph", version, about)]
pub struct Opt {
    /// Root of the workspace searched for `inputs.txt`, `outputs.txt` and the solution file.
    #[arg(short, long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    #[command(flatten)]
    pub logger: LoggerOpt,

    /// The operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// A user-triggered operation.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the sample test case of a problem and scaffold a solution file next to it.
    Fetch(FetchOpt),
    /// Run a solution against the fetched sample test case and compare the outputs.
    Test(TestOpt),
    /// List the supported languages.
    Languages,
}

/// Options of the `fetch` operation.
#[derive(Args, Debug)]
pub struct FetchOpt {
    /// URL of the problem page on the judge.
    pub url: String,

    /// Language to scaffold the solution in. Accepts the language name or any of its extensions
    /// (e.g. `C++`, `cpp`, `python`, `py`).
    #[arg(short, long)]
    pub language: String,

    /// External command that deposits `inputs.txt` and `outputs.txt` in the workspace.
    ///
    /// Invoked as `<command> <url> <workspace>`. Defaults to `$CPH_FETCHER`; without a configured
    /// fetcher only the solution file is scaffolded.
    #[arg(long)]
    pub fetcher: Option<String>,
}

/// Options of the `test` operation.
#[derive(Args, Debug, Default)]
pub struct TestOpt {
    /// Path of the solution to judge. When omitted the workspace is searched for a `solution.*`
    /// file in a supported language.
    pub solution: Option<PathBuf>,

    /// Do not treat stderr output of the solution as a failure.
    ///
    /// By default any stderr output fails the run, even with exit status zero.
    #[arg(long)]
    pub allow_stderr: bool,

    /// Kill the solution if it runs for more than this number of seconds.
    ///
    /// By default the run may block indefinitely.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the report as JSON instead of the human-readable message.
    #[arg(long)]
    pub json: bool,
}

/// Options for the logger.
#[derive(Args, Debug, Clone)]
pub struct LoggerOpt {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl LoggerOpt {
    /// Enable the logging based on the verbosity level.
    pub fn enable_log(&self) {
        if self.verbose > 0 {
            std::env::set_var("RUST_BACKTRACE", "1");
            match self.verbose {
                0 => unreachable!(),
                1 => std::env::set_var("RUST_LOG", "info"),
                2 => std::env::set_var("RUST_LOG", "debug"),
                _ => std::env::set_var("RUST_LOG", "trace"),
            }
        }

        env_logger::Builder::from_default_env()
            .format_timestamp_nanos()
            .init();
        better_panic::install();
    }
}

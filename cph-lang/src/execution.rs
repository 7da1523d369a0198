use std::fs::File;
use std::io;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::time::{Duration, Instant};

use log::{debug, warn};
use thiserror::Error;

/// Polling interval while waiting for a child with a time limit.
const WAIT_INTERVAL: Duration = Duration::from_millis(20);

/// Command to run a program: either a system program, looked up in `$PATH` when the process is
/// spawned, or a local executable referenced by its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionCommand {
    /// A system command, the path is looked up in `$PATH`.
    System(PathBuf),
    /// A local executable.
    Local(PathBuf),
}

impl ExecutionCommand {
    /// Make a new `ExecutionCommand` from a system command.
    pub fn system<P: Into<PathBuf>>(path: P) -> ExecutionCommand {
        ExecutionCommand::System(path.into())
    }

    /// Make a new `ExecutionCommand` from a local executable.
    pub fn local<P: Into<PathBuf>>(path: P) -> ExecutionCommand {
        ExecutionCommand::Local(path.into())
    }

    /// Resolve to the path of the actual program to spawn.
    fn resolve(&self) -> Result<PathBuf, ExecutionError> {
        match self {
            ExecutionCommand::System(name) => {
                which::which(name).map_err(|_| ExecutionError::CommandNotFound {
                    command: name.clone(),
                })
            }
            ExecutionCommand::Local(path) => Ok(path.clone()),
        }
    }
}

/// Options controlling the run of a solution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionOptions {
    /// Treat stderr output of a successfully exiting process as ordinary noise instead of a
    /// failure. By default any stderr output fails the run, even with exit status zero.
    pub lenient_stderr: bool,
    /// Kill the child if it runs longer than this. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// The outcome of a successful run of a program.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// The standard output of the process, with the leading and trailing whitespace of the overall
    /// stream trimmed. The internal structure is untouched.
    pub stdout: String,
    /// The standard error of the process. Non-empty only with
    /// [`lenient_stderr`](struct.ExecutionOptions.html#structfield.lenient_stderr).
    pub stderr: String,
}

/// An error produced while compiling or running a solution.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The compiler or interpreter is not installed on this system.
    #[error("cannot find {command:?} in $PATH")]
    CommandNotFound {
        /// The command that could not be resolved.
        command: PathBuf,
    },
    /// The process could not be spawned at all.
    #[error("failed to start {command:?}")]
    SpawnFailed {
        /// The program that failed to start.
        command: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// An I/O error while interacting with the child process.
    #[error("i/o error while running {command:?}")]
    Io {
        /// The program that was running.
        command: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Failed to create the directory for the compiled binary.
    #[error("failed to create the build directory")]
    BuildDir(#[source] io::Error),
    /// The process exited with a non-zero status or wrote to stderr. The detail is the stderr text
    /// of the process.
    #[error("{description} failed:\n{detail}")]
    Failed {
        /// What was being run, e.g. `Compilation of solution.cpp`.
        description: String,
        /// The stderr text of the process, or the exit status when stderr is empty.
        detail: String,
    },
    /// The time limit expired and the process has been killed.
    #[error("{description} timed out after {seconds}s")]
    TimedOut {
        /// What was being run.
        description: String,
        /// The configured limit, in seconds.
        seconds: u64,
    },
}

/// Run a command to completion inside `workdir`, feeding it `stdin_from` (or nothing) and
/// capturing both output streams.
///
/// The run fails if the process exits with a non-zero status or, unless
/// `options.lenient_stderr` is set, if it writes anything at all to stderr. Compilers may emit
/// warnings on stderr with status zero and this policy still flags them.
pub(crate) fn run_process(
    description: String,
    command: &ExecutionCommand,
    args: &[String],
    workdir: &Path,
    stdin_from: Option<&Path>,
    options: &ExecutionOptions,
) -> Result<ExecutionResult, ExecutionError> {
    let program = command.resolve()?;
    debug!("{}: {:?} {:?} in {:?}", description, program, args, workdir);

    let mut cmd = Command::new(&program);
    cmd.args(args)
        .current_dir(workdir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    match stdin_from {
        Some(path) => {
            let input = File::open(path).map_err(|source| ExecutionError::Io {
                command: program.clone(),
                source,
            })?;
            cmd.stdin(Stdio::from(input));
        }
        None => {
            cmd.stdin(Stdio::null());
        }
    }

    let child = cmd.spawn().map_err(|source| ExecutionError::SpawnFailed {
        command: program.clone(),
        source,
    })?;
    let output = wait_child(child, &program, &description, options.timeout)?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    if !output.status.success() || (!stderr.is_empty() && !options.lenient_stderr) {
        let detail = if stderr.is_empty() {
            format!("process exited with {}", output.status)
        } else {
            stderr
        };
        return Err(ExecutionError::Failed {
            description,
            detail,
        });
    }
    if !stderr.is_empty() {
        warn!("{} wrote to stderr:\n{}", description, stderr.trim_end());
    }
    Ok(ExecutionResult {
        stdout: stdout.trim().to_string(),
        stderr,
    })
}

/// Wait for the child to exit, collecting its output. With a time limit the output pipes are
/// drained from separate threads while the status is polled, so that a chatty child cannot
/// deadlock on a full pipe before being killed.
fn wait_child(
    mut child: Child,
    program: &Path,
    description: &str,
    timeout: Option<Duration>,
) -> Result<Output, ExecutionError> {
    let io_error = |source| ExecutionError::Io {
        command: program.to_path_buf(),
        source,
    };
    let Some(timeout) = timeout else {
        return child.wait_with_output().map_err(io_error);
    };

    let stdout = child.stdout.take().expect("stdout is not piped");
    let stderr = child.stderr.take().expect("stderr is not piped");
    let stdout_reader = std::thread::spawn(move || read_all(stdout));
    let stderr_reader = std::thread::spawn(move || read_all(stderr));

    let start = Instant::now();
    let status: ExitStatus = loop {
        if let Some(status) = child.try_wait().map_err(io_error)? {
            break status;
        }
        if start.elapsed() >= timeout {
            // best effort: the child may have exited in the meantime
            let _ = child.kill();
            let _ = child.wait();
            return Err(ExecutionError::TimedOut {
                description: description.to_string(),
                seconds: timeout.as_secs(),
            });
        }
        std::thread::sleep(WAIT_INTERVAL);
    };

    let stdout = stdout_reader
        .join()
        .expect("stdout reader panicked")
        .map_err(io_error)?;
    let stderr = stderr_reader
        .join()
        .expect("stderr reader panicked")
        .map_err(io_error)?;
    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

//! Run JSON text through an external formatter (prettier).
//!
//! The formatter is a child process fed over stdin and read from stdout. The
//! calling thread owns the [`Child`] and polls it against a deadline; helper
//! threads only drain the pipes. A guard kills and reaps the child on every
//! exit path, and draining after a kill is bounded so a descendant that keeps
//! a pipe open cannot stall the caller.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Name of the formatter executable.
const PRETTIER: &str = "prettier";

/// How often the child is polled while waiting for it to exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Upper bound on collecting pipe output once the child is gone.
///
/// A descendant of the formatter can inherit its pipes and keep them open
/// after the formatter itself exits.
const PIPE_DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// An external formatter command with a time budget.
#[derive(Debug, Clone)]
pub struct Formatter {
    program: PathBuf,
    args: Vec<OsString>,
    timeout: Duration,
}

/// Result of a single formatter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The formatter exited successfully; its complete, non-empty stdout.
    Formatted(String),
    /// The formatter did not finish in time and was killed.
    TimedOut { stderr: String },
    /// The formatter could not be run, exited unsuccessfully, or produced no
    /// usable output.
    Failed { message: String },
}

impl Formatter {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I, timeout: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout,
        }
    }

    /// Find prettier, preferring the project-local install in `node_bin`.
    ///
    /// Returns `None` when prettier is neither in `node_bin` nor on `PATH`.
    pub fn discover(node_bin: &Path, timeout: Duration) -> Option<Self> {
        let local = node_bin.join(PRETTIER);
        let program = if local.is_file() {
            local
        } else {
            which::which(PRETTIER).ok()?
        };
        Some(Self::new(program, ["--parser", "json"], timeout))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Feed `input` to the formatter and collect its output.
    pub fn format(&self, input: &str) -> FormatOutcome {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        match communicate(command, input, self.timeout) {
            Ok(Communicated::Exited {
                status,
                stdout,
                stderr,
            }) => {
                if !status.success() {
                    return FormatOutcome::Failed {
                        message: format!("{status}: {}", stderr.unwrap_or_default().trim()),
                    };
                }
                match stdout {
                    None => FormatOutcome::Failed {
                        message: format!(
                            "`{}` exited but its output was not closed within {:?}",
                            self.program.display(),
                            PIPE_DRAIN_TIMEOUT
                        ),
                    },
                    Some(stdout) if stdout.trim().is_empty() && !input.trim().is_empty() => {
                        FormatOutcome::Failed {
                            message: format!("`{}` produced no output", self.program.display()),
                        }
                    }
                    Some(stdout) => FormatOutcome::Formatted(stdout),
                }
            }
            Ok(Communicated::TimedOut { stderr }) => FormatOutcome::TimedOut {
                stderr: stderr.unwrap_or_default(),
            },
            Err(err) => FormatOutcome::Failed {
                message: format!("failed to run `{}`: {err}", self.program.display()),
            },
        }
    }
}

/// What happened to a child run by [`communicate`].
#[derive(Debug)]
enum Communicated {
    /// The child exited. A pipe is `None` if it could not be drained in time.
    Exited {
        status: ExitStatus,
        stdout: Option<String>,
        stderr: Option<String>,
    },
    TimedOut {
        stderr: Option<String>,
    },
}

/// Kills and reaps the child unless it has already exited.
struct ChildGuard(Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !matches!(self.0.try_wait(), Ok(Some(_))) {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }
}

/// Spawn `command`, write `input` to its stdin, and wait up to `timeout` for it to exit.
fn communicate(mut command: Command, input: &str, timeout: Duration) -> io::Result<Communicated> {
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = ChildGuard(command.spawn()?);
    let deadline = Instant::now() + timeout;

    // Write from a helper thread so a formatter that never reads stdin cannot
    // block us past the deadline. Dropping the handle closes the pipe.
    if let Some(mut stdin) = child.0.stdin.take() {
        let input = input.to_owned();
        thread::spawn(move || {
            let _ = stdin.write_all(input.as_bytes());
        });
    }
    let stdout = drain(child.0.stdout.take());
    let stderr = drain(child.0.stderr.take());

    loop {
        if let Some(status) = child.0.try_wait()? {
            return Ok(Communicated::Exited {
                status,
                stdout: collect(&stdout),
                stderr: collect(&stderr),
            });
        }
        if Instant::now() >= deadline {
            let _ = child.0.kill();
            let _ = child.0.wait();
            return Ok(Communicated::TimedOut {
                stderr: collect(&stderr),
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Read a pipe to its end on a helper thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    if let Some(mut pipe) = pipe {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            let _ = tx.send(buf);
        });
    }
    rx
}

/// Wait a bounded time for a drained pipe. `None` if the pipe is still open.
fn collect(rx: &mpsc::Receiver<Vec<u8>>) -> Option<String> {
    rx.recv_timeout(PIPE_DRAIN_TIMEOUT)
        .ok()
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
}

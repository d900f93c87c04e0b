//! Command dispatch for freeze-poetry.

use std::path::Path;
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};

use crate::cli;
use crate::printer::Printer;

mod freeze;
mod version;

/// Exit status for freeze-poetry commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed due to an error in the user input.
    Failure,

    /// The command failed with an unexpected error.
    Error,

    /// The command's exit status is propagated from an external command.
    External(u8),
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
            ExitStatus::External(code) => Self::from(code),
        }
    }
}

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(command: cli::Commands, printer: Printer) -> Result<ExitStatus> {
    let current_dir = std::env::current_dir().context("failed to determine current directory")?;
    match command {
        cli::Commands::Freeze(args) => freeze::execute(&args, current_dir, printer),
        cli::Commands::SyncVersion(args) => version::sync(&args, current_dir, printer),
        cli::Commands::Bump(args) => version::bump(&args, current_dir, printer),
        cli::Commands::Tag(args) => version::tag(&args, current_dir, printer),
    }
}

/// Run an external tool in `root` and map its exit code.
///
/// Output is inherited so the tool reports its own progress.
fn run_external(program: &str, args: &[&str], root: &Path, printer: Printer) -> Result<ExitStatus> {
    printer.debug(&format!("Running command: `{program} {}`", args.join(" ")));

    let status = Command::new(program)
        .args(args)
        .current_dir(root)
        .status()
        .with_context(|| format!("failed to run `{program}`"))?;

    if status.success() {
        return Ok(ExitStatus::Success);
    }

    printer.error(&format!("`{program} {}` failed ({status})", args.join(" ")));
    Ok(status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitStatus::Failure, ExitStatus::External))
}

//! `freeze-poetry freeze`: write the requirements file from `poetry.lock`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::FreezeArgs;
use crate::commands::{ExitStatus, run_external};
use crate::lock::{WriteOutcome, freeze};
use crate::printer::Printer;

/// Execute `freeze-poetry freeze`.
pub(super) fn execute(
    args: &FreezeArgs,
    current_dir: PathBuf,
    printer: Printer,
) -> Result<ExitStatus> {
    let mut settings = args.root.settings(current_dir);
    settings.indent = args.indent;

    if args.force || !settings.lock_file.is_file() {
        printer.debug("Updating poetry.lock");
        let status = run_external("poetry", &["update"], &settings.root, printer)?;
        if status != ExitStatus::Success {
            return Ok(status);
        }
    }

    let frozen = freeze(&settings, args.include_dev(), !args.no_hashes, printer)
        .context("failed to freeze requirements")?;

    let name = frozen
        .path
        .file_name()
        .unwrap_or(frozen.path.as_os_str())
        .to_string_lossy();
    let plural = if frozen.count == 1 { "" } else { "s" };
    match frozen.outcome {
        WriteOutcome::Changed => {
            printer.info(&format!("Froze {} requirement{plural} to {name}", frozen.count));
        }
        WriteOutcome::Unchanged => {
            printer.info(&format!(
                "{name} is up to date ({} requirement{plural})",
                frozen.count
            ));
        }
    }

    Ok(ExitStatus::Success)
}

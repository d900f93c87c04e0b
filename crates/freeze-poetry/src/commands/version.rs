//! `sync-version`, `bump`, and `tag`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::ProjectArgs;
use crate::commands::{ExitStatus, run_external};
use crate::manifest::{Formatter, SyncOutcome, VersionSync, sync_versions};
use crate::printer::Printer;
use crate::settings::ProjectSettings;

/// Execute `freeze-poetry sync-version`.
pub(super) fn sync(args: &ProjectArgs, current_dir: PathBuf, printer: Printer) -> Result<ExitStatus> {
    let settings = args.settings(current_dir);
    let sync = sync_project(&settings, printer)?;
    printer.output(&sync.version);
    Ok(ExitStatus::Success)
}

/// Execute `freeze-poetry bump`.
pub(super) fn bump(args: &ProjectArgs, current_dir: PathBuf, printer: Printer) -> Result<ExitStatus> {
    let settings = args.settings(current_dir);

    let status = run_external("poetry", &["version", "patch"], &settings.root, printer)?;
    if status != ExitStatus::Success {
        return Ok(status);
    }
    let status = run_external(
        "yarn",
        &["version", "--patch", "--no-git-tag-version"],
        &settings.root,
        printer,
    )?;
    if status != ExitStatus::Success {
        return Ok(status);
    }

    let sync = sync_project(&settings, printer)?;
    printer.output(&sync.version);
    Ok(ExitStatus::Success)
}

/// Execute `freeze-poetry tag`.
pub(super) fn tag(args: &ProjectArgs, current_dir: PathBuf, printer: Printer) -> Result<ExitStatus> {
    let settings = args.settings(current_dir);
    let sync = sync_project(&settings, printer)?;

    let tag = format!("v{}", sync.version);
    let status = run_external("git", &["tag", &tag], &settings.root, printer)?;
    if status == ExitStatus::Success {
        printer.info(&format!("Tagged {tag}"));
    }
    Ok(status)
}

fn sync_project(settings: &ProjectSettings, printer: Printer) -> Result<VersionSync> {
    let formatter = Formatter::discover(&settings.node_bin, settings.formatter_timeout);
    let sync =
        sync_versions(settings, formatter.as_ref(), printer).context("failed to sync versions")?;
    if sync.outcome != SyncOutcome::Unchanged {
        printer.info(&format!(
            "Updated {} to {}",
            settings.node_package.display(),
            sync.version
        ));
    }
    Ok(sync)
}

//! Lock file → requirements file, end to end.

use std::path::PathBuf;

use crate::error::Result;
use crate::lock::model::PoetryLock;
use crate::lock::requirements::{RenderOptions, render_requirements};
use crate::lock::writer::{WriteOutcome, write_if_changed};
use crate::printer::Printer;
use crate::settings::ProjectSettings;

/// The result of [`freeze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frozen {
    /// The requirements file that was considered.
    pub path: PathBuf,
    /// Number of requirements it lists.
    pub count: usize,
    pub outcome: WriteOutcome,
}

/// Render the project's lock file and write it to the requirements file for the mode.
///
/// Nothing is written if the lock file cannot be parsed.
pub fn freeze(
    settings: &ProjectSettings,
    include_dev: bool,
    with_hash: bool,
    printer: Printer,
) -> Result<Frozen> {
    printer.debug(&format!("Reading lock file: {}", settings.lock_file.display()));
    let lock = PoetryLock::from_path(&settings.lock_file)?;

    let options = RenderOptions {
        indent: settings.indent,
        with_hash,
    };
    let requirements = render_requirements(lock.dependencies(include_dev, printer), options);
    printer.debug(&format!("{} requirements", requirements.count));

    let path = settings.requirements_file(include_dev).to_path_buf();
    let outcome = write_if_changed(&path, &requirements.contents)?;
    printer.debug(&match outcome {
        WriteOutcome::Changed => format!("Wrote {}", path.display()),
        WriteOutcome::Unchanged => format!("{} unchanged", path.display()),
    });

    Ok(Frozen {
        path,
        count: requirements.count,
        outcome,
    })
}

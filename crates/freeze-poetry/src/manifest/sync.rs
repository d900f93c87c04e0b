//! Keep the `package.json` version in step with `pyproject.toml`.

use crate::error::Result;
use crate::manifest::formatter::{FormatOutcome, Formatter};
use crate::manifest::node_package::NodePackage;
use crate::manifest::pyproject;
use crate::printer::Printer;
use crate::settings::ProjectSettings;

/// The result of [`sync_versions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSync {
    /// The `pyproject.toml` version, which `package.json` now carries.
    pub version: String,
    pub outcome: SyncOutcome,
}

/// What [`sync_versions`] did to `package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The versions already matched; nothing was written.
    Unchanged,
    /// The file was rewritten with the formatter's output.
    Formatted,
    /// The file was rewritten with plain serialized JSON.
    Unformatted(Fallback),
}

/// Why the formatter's output was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// No formatter was available.
    NoFormatter,
    /// The formatter was killed after exceeding its time budget.
    TimedOut { stderr: String },
    /// The formatter could not be run, exited unsuccessfully, or its output
    /// was unusable.
    Failed { message: String },
}

/// Copy the `pyproject.toml` version into `package.json` if they differ.
///
/// The rewritten `package.json` goes through `formatter` when one is given.
/// A formatter that fails or times out never prevents the version from being
/// written: the plain serialized JSON is written instead and the formatter's
/// error output is reported as a warning.
pub fn sync_versions(
    settings: &ProjectSettings,
    formatter: Option<&Formatter>,
    printer: Printer,
) -> Result<VersionSync> {
    printer.debug(&format!(
        "Syncing versions in {} and {}",
        settings.pyproject.display(),
        settings.node_package.display()
    ));

    let mut node_package = NodePackage::from_path(&settings.node_package)?;
    let version = pyproject::read_version(&settings.pyproject, &settings.tool_name)?;

    if node_package.version()? == version {
        printer.debug(&format!("Versions already match ({version})"));
        return Ok(VersionSync {
            version,
            outcome: SyncOutcome::Unchanged,
        });
    }

    printer.debug(&format!(
        "Updating {} from {} to {version}",
        node_package.path().display(),
        node_package.version()?
    ));
    node_package.set_version(&version);
    let raw = node_package.to_json_string()?;

    let (contents, outcome) = match formatter.map(|formatter| format_with(formatter, &raw, printer))
    {
        Some(FormatOutcome::Formatted(formatted)) => (formatted, SyncOutcome::Formatted),
        Some(FormatOutcome::TimedOut { stderr }) => {
            printer.warn(&format!(
                "Formatter timed out; writing {} unformatted",
                node_package.path().display()
            ));
            if !stderr.trim().is_empty() {
                printer.warn(stderr.trim());
            }
            (raw, SyncOutcome::Unformatted(Fallback::TimedOut { stderr }))
        }
        Some(FormatOutcome::Failed { message }) => {
            printer.warn(&format!(
                "Formatter failed; writing {} unformatted: {message}",
                node_package.path().display()
            ));
            (raw, SyncOutcome::Unformatted(Fallback::Failed { message }))
        }
        None => {
            printer.debug("No formatter found; writing unformatted JSON");
            (raw, SyncOutcome::Unformatted(Fallback::NoFormatter))
        }
    };

    fs_err::write(node_package.path(), contents)?;
    Ok(VersionSync { version, outcome })
}

fn format_with(formatter: &Formatter, raw: &str, printer: Printer) -> FormatOutcome {
    printer.debug(&format!(
        "Running output through `{}` (timeout {:?})",
        formatter.program().display(),
        formatter.timeout()
    ));
    formatter.format(raw)
}

//! Project layout and tunables.
//!
//! Every path freeze-poetry touches is derived once from the project root and
//! stored explicitly, so commands and tests can override any of them.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::lock::requirements::DEFAULT_INDENT;

/// Default time budget for the external formatter.
pub const DEFAULT_FORMATTER_TIMEOUT: Duration = Duration::from_secs(15);

/// Default `[tool.<name>]` table holding the project version.
pub const DEFAULT_TOOL_NAME: &str = "poetry";

/// Paths and settings for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// The project root.
    pub root: PathBuf,
    /// Production requirements output.
    pub requirements: PathBuf,
    /// Development requirements output.
    pub dev_requirements: PathBuf,
    /// The `poetry.lock` input.
    pub lock_file: PathBuf,
    /// The primary manifest.
    pub pyproject: PathBuf,
    /// The secondary manifest.
    pub node_package: PathBuf,
    /// Directory searched first for the formatter executable.
    pub node_bin: PathBuf,
    /// Tool table in `pyproject.toml` that holds the version.
    pub tool_name: String,
    /// Indent width of `--hash` lines.
    pub indent: usize,
    /// Time budget for the external formatter.
    pub formatter_timeout: Duration,
}

impl ProjectSettings {
    /// Derive the default layout for the project at `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            requirements: root.join("requirements.txt"),
            dev_requirements: root.join("requirements-dev.txt"),
            lock_file: root.join("poetry.lock"),
            pyproject: root.join("pyproject.toml"),
            node_package: root.join("package.json"),
            node_bin: root.join("node_modules").join(".bin"),
            tool_name: DEFAULT_TOOL_NAME.to_owned(),
            indent: DEFAULT_INDENT,
            formatter_timeout: DEFAULT_FORMATTER_TIMEOUT,
            root,
        }
    }

    /// The requirements file written in the given mode.
    pub fn requirements_file(&self, dev: bool) -> &Path {
        if dev {
            &self.dev_requirements
        } else {
            &self.requirements
        }
    }
}

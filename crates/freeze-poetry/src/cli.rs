//! CLI argument definitions for freeze-poetry.
//!
//! All clap derive structs live here. The [`Cli`] struct is the top-level
//! parser; [`Commands`] enumerates every subcommand.

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

use crate::settings::ProjectSettings;

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Freeze a poetry lock file into hash-pinned requirements.
#[derive(Parser, Debug)]
#[command(
    name = "freeze-poetry",
    author,
    version,
    about = "Freeze a poetry lock file into hash-pinned requirements.",
    styles = STYLES,
    max_term_width = 100,
    after_help = "Use `freeze-poetry help <command>` for more information on a specific command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity.
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(global = true, short, long)]
    pub quiet: bool,
}

/// Top-level subcommands for freeze-poetry.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write requirements.txt (or requirements-dev.txt) from poetry.lock.
    Freeze(FreezeArgs),

    /// Copy the pyproject.toml version into package.json and print it.
    SyncVersion(ProjectArgs),

    /// Bump the patch version with poetry and yarn, then sync.
    Bump(ProjectArgs),

    /// Sync versions, then create a `v<version>` git tag.
    Tag(ProjectArgs),
}

/// The positional project root.
#[derive(Args, Debug)]
pub struct RootArgs {
    /// The project root.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

impl RootArgs {
    /// Default settings for the chosen root, falling back to `current_dir`.
    pub fn settings(&self, current_dir: PathBuf) -> ProjectSettings {
        ProjectSettings::from_root(self.root.clone().unwrap_or(current_dir))
    }
}

/// Arguments for the commands that read and sync project versions.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// The `[tool.<name>]` table in pyproject.toml that holds the version.
    #[arg(long, default_value = crate::settings::DEFAULT_TOOL_NAME)]
    pub tool: String,

    /// Seconds to wait for the JSON formatter before writing unformatted output.
    #[arg(long, value_name = "SECONDS", env = "FREEZE_POETRY_FORMATTER_TIMEOUT", default_value_t = 15)]
    pub formatter_timeout: u64,
}

impl ProjectArgs {
    pub fn settings(&self, current_dir: PathBuf) -> ProjectSettings {
        let mut settings = self.root.settings(current_dir);
        settings.tool_name.clone_from(&self.tool);
        settings.formatter_timeout = Duration::from_secs(self.formatter_timeout);
        settings
    }
}

/// Arguments for `freeze-poetry freeze`.
#[derive(Args, Debug)]
pub struct FreezeArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Include dev packages and write requirements-dev.txt (the default).
    #[arg(short, long, overrides_with = "prod")]
    pub dev: bool,

    /// Exclude dev packages and write requirements.txt.
    #[arg(short, long, overrides_with = "dev")]
    pub prod: bool,

    /// Run `poetry update` before freezing, even if poetry.lock exists.
    #[arg(short, long)]
    pub force: bool,

    /// Omit `--hash` lines.
    #[arg(long)]
    pub no_hashes: bool,

    /// Indent width of `--hash` lines.
    #[arg(long, default_value_t = crate::lock::requirements::DEFAULT_INDENT)]
    pub indent: usize,
}

impl FreezeArgs {
    /// Whether dev packages are included (default: true).
    pub fn include_dev(&self) -> bool {
        !self.prod
    }
}

//! Terminal output.
//!
//! Results go to stdout and are never silenced, so `sync-version` stays
//! scriptable under `--quiet`. Everything else is a diagnostic on stderr,
//! filtered by [`Level`].

use anstream::{eprintln, println};
use owo_colors::OwoColorize;

/// How much diagnostic output to emit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Errors only.
    Quiet,
    /// Errors, warnings and progress.
    Normal,
    /// Everything, including `debug:` lines.
    Verbose,
}

#[derive(Copy, Clone, Debug)]
pub struct Printer {
    level: Level,
}

impl Printer {
    /// `--quiet` wins over any number of `-v` flags.
    pub fn new(verbosity: u8, quiet: bool) -> Self {
        let level = match (quiet, verbosity) {
            (true, _) => Level::Quiet,
            (false, 0) => Level::Normal,
            (false, _) => Level::Verbose,
        };
        Self { level }
    }

    pub fn level(self) -> Level {
        self.level
    }

    pub fn output(self, message: &str) {
        println!("{message}");
    }

    pub fn info(self, message: &str) {
        if self.level >= Level::Normal {
            eprintln!("{message}");
        }
    }

    pub fn warn(self, message: &str) {
        if self.level >= Level::Normal {
            eprintln!("{}: {message}", "warning".yellow().bold());
        }
    }

    pub fn error(self, message: &str) {
        eprintln!("{}: {message}", "error".red().bold());
    }

    pub fn debug(self, message: &str) {
        if self.level >= Level::Verbose {
            eprintln!("{}: {message}", "debug".dimmed());
        }
    }
}

//! freeze-poetry: hash-pinned requirements from `poetry.lock`.
//!
//! This crate provides the main entry point and command dispatch for the
//! freeze-poetry binary, plus the library pieces it is built from:
//!
//! - [`lock`] turns `poetry.lock` into a deterministic `requirements.txt` and
//!   only rewrites it when the contents change.
//! - [`manifest`] keeps the `package.json` version equal to the
//!   `pyproject.toml` version.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
pub mod error;
pub mod lock;
pub mod manifest;
pub mod printer;
pub mod settings;

pub use error::{Error, Result};

/// Entry point for the freeze-poetry CLI.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    let printer = Printer::new(cli.verbose, cli.quiet);

    match commands::dispatch(cli.command, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            let mut causes = err.chain();
            if let Some(error) = causes.next() {
                printer.error(&error.to_string());
            }
            for cause in causes {
                eprintln!(
                    "  {}: {}",
                    "Caused by".red().bold(),
                    cause.to_string().trim()
                );
            }
            ExitStatus::Error.into()
        }
    }
}

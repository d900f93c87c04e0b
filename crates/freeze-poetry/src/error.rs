//! Error types for freeze-poetry.
//!
//! Only conditions that abort an operation are represented here. Recoverable
//! conditions (missing hash metadata, an absent or slow formatter) are
//! reported through the [`Printer`](crate::printer::Printer) or returned as
//! outcomes instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the lock file or the project manifests.
#[derive(Debug, Error)]
pub enum Error {
    /// The lock document is not valid TOML or lacks the expected structure.
    #[error("malformed lock file `{}`: {message}", path.display())]
    MalformedLock { path: PathBuf, message: String },

    /// A manifest could not be parsed.
    #[error("malformed manifest `{}`: {message}", path.display())]
    MalformedManifest { path: PathBuf, message: String },

    /// A manifest is missing its version field, or the field is not a string.
    #[error("`{}` has no string value at `{key}`", path.display())]
    MissingVersion { path: PathBuf, key: String },

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

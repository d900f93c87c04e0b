//! Write a file only when its contents would change.

use std::io;
use std::path::Path;

use crate::error::Result;

/// Whether [`write_if_changed`] touched the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or overwritten.
    Changed,
    /// The file already held the same bytes and was left alone.
    Unchanged,
}

impl WriteOutcome {
    pub fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Write `contents` to `path` unless the file already contains exactly those bytes.
///
/// A missing file is always written. Any other read error is returned.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteOutcome> {
    match fs_err::read(path) {
        Ok(existing) if existing == contents.as_bytes() => return Ok(WriteOutcome::Unchanged),
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }

    fs_err::write(path, contents)?;
    Ok(WriteOutcome::Changed)
}

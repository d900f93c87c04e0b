//! A single pinned dependency, normalized from a `poetry.lock` record.

use std::collections::BTreeSet;

use crate::lock::model::{FileRecord, LockedPackage};

/// Marker clause that makes a package conditional on an optional feature.
const EXTRA_CLAUSE: &str = "extra ==";

/// A locked package, ready to be rendered as a requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name.
    pub name: String,
    /// Exact resolved version.
    pub version: String,
    /// Content hashes, in the order the lock metadata lists them.
    pub hashes: Vec<String>,
    /// Environment marker. Empty means the dependency always applies.
    pub marker: String,
    /// Names of the packages this one depends on.
    pub dependencies: BTreeSet<String>,
}

impl Dependency {
    /// Build a [`Dependency`] from a lock record and its file metadata.
    pub fn from_lock(package: &LockedPackage, files: &[FileRecord]) -> Self {
        Self {
            name: package.name.clone(),
            version: package.version.clone(),
            hashes: files.iter().map(|file| file.hash.clone()).collect(),
            marker: normalize_marker(package.marker.as_deref().unwrap_or_default()),
            dependencies: package.dependencies.keys().cloned().collect(),
        }
    }
}

/// Drop markers that gate a package behind an extra.
///
/// The lock has already decided which extras are selected, so anything that
/// made it into the lock is required unconditionally. Detection is a plain
/// substring match on `extra ==`.
pub fn normalize_marker(marker: &str) -> String {
    if marker.contains(EXTRA_CLAUSE) {
        String::new()
    } else {
        marker.to_owned()
    }
}

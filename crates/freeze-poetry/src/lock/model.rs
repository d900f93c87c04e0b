//! Data model types for `poetry.lock` deserialization.
//!
//! Only the parts of the lock document that feed the requirements file are
//! modelled: the `[[package]]` list and the `[metadata.files]` table. Any
//! other keys are ignored.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::Error as _;

use crate::error::{Error, Result};
use crate::lock::dependency::Dependency;
use crate::printer::Printer;

/// Top-level `poetry.lock` structure.
#[derive(Debug, Deserialize)]
pub struct PoetryLock {
    /// Locked packages, in the order the lock file lists them.
    #[serde(rename = "package")]
    pub packages: Vec<LockedPackage>,

    /// Lock metadata.
    pub metadata: LockMetadata,
}

/// The `[metadata]` section of `poetry.lock`.
#[derive(Debug, Deserialize)]
pub struct LockMetadata {
    /// Distribution files per package name.
    pub files: BTreeMap<String, Vec<FileRecord>>,
}

/// A `[[package]]` entry.
#[derive(Debug, Deserialize)]
pub struct LockedPackage {
    /// Package name.
    pub name: String,

    /// Exact resolved version.
    pub version: String,

    /// PEP 508 environment marker, if any.
    #[serde(default)]
    pub marker: Option<String>,

    /// Whether this is a production or a development package.
    #[serde(default)]
    pub category: Category,

    /// Direct dependencies. Only the keys are used.
    #[serde(default)]
    pub dependencies: BTreeMap<String, toml::Value>,
}

/// The `category` tag of a locked package.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Main,
    Dev,
}

/// A distribution file listed under `[metadata.files]`.
#[derive(Debug, Deserialize)]
pub struct FileRecord {
    /// Content hash, e.g. `sha256:...`. Emitted verbatim.
    pub hash: String,
}

impl PoetryLock {
    /// Parse a lock file from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        content.parse::<Self>().map_err(|err| Error::MalformedLock {
            path: path.to_path_buf(),
            message: err.message().to_owned(),
        })
    }

    /// Return the locked packages as [`Dependency`] values, in lock order.
    ///
    /// Development packages are skipped unless `include_dev` is set. A package
    /// without an entry in `[metadata.files]` gets an empty hash list.
    pub fn dependencies(
        &self,
        include_dev: bool,
        printer: Printer,
    ) -> impl Iterator<Item = Dependency> + '_ {
        self.packages
            .iter()
            .filter(move |package| include_dev || package.category != Category::Dev)
            .map(move |package| {
                let files = self.metadata.files.get(&package.name);
                if files.is_none() {
                    printer.debug(&format!(
                        "No file metadata for `{}`; emitting it without hashes",
                        package.name
                    ));
                }
                Dependency::from_lock(package, files.map(Vec::as_slice).unwrap_or_default())
            })
    }
}

impl FromStr for PoetryLock {
    type Err = toml::de::Error;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let lock: Self = toml::from_str(content)?;
        for package in &lock.packages {
            if package.name.is_empty() {
                return Err(toml::de::Error::custom("package with an empty `name`"));
            }
            if package.version.is_empty() {
                return Err(toml::de::Error::custom(format!(
                    "package `{}` has an empty `version`",
                    package.name
                )));
            }
        }
        Ok(lock)
    }
}

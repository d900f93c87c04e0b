//! `package.json` handling.
//!
//! The document is kept as a generic JSON object so fields other than
//! `version` survive a rewrite untouched and in their original order.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A parsed `package.json`.
#[derive(Debug, Clone)]
pub struct NodePackage {
    path: PathBuf,
    document: Map<String, Value>,
}

impl NodePackage {
    /// Parse a `package.json` from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        let document =
            serde_json::from_str(&content).map_err(|err| Error::MalformedManifest {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The top-level `version` field.
    pub fn version(&self) -> Result<&str> {
        self.document
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingVersion {
                path: self.path.clone(),
                key: "version".to_owned(),
            })
    }

    /// Replace the top-level `version` field, keeping its position.
    pub fn set_version(&mut self, version: &str) {
        self.document
            .insert("version".to_owned(), Value::String(version.to_owned()));
    }

    /// Serialize as two-space indented JSON with a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.document).map_err(io::Error::from)?;
        Ok(format!("{json}\n"))
    }
}

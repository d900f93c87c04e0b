//! Read the project version from `pyproject.toml`.

use std::path::Path;

use crate::error::{Error, Result};

/// Read `tool.<tool>.version` from the `pyproject.toml` at `path`.
pub fn read_version(path: &Path, tool: &str) -> Result<String> {
    let content = fs_err::read_to_string(path)?;
    let document: toml::Table =
        toml::from_str(&content).map_err(|err| Error::MalformedManifest {
            path: path.to_path_buf(),
            message: err.message().to_owned(),
        })?;

    document
        .get("tool")
        .and_then(|tables| tables.get(tool))
        .and_then(|table| table.get("version"))
        .and_then(toml::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::MissingVersion {
            path: path.to_path_buf(),
            key: format!("tool.{tool}.version"),
        })
}

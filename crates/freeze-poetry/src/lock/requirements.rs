//! Render pinned dependencies as a hash-checked `requirements.txt`.
//!
//! Output is a pure function of the input sequence and [`RenderOptions`], so
//! rendering the same lock twice always produces the same bytes.

use std::borrow::Borrow;

use crate::lock::dependency::Dependency;

/// Default width of the whitespace prefix on `--hash` lines.
pub const DEFAULT_INDENT: usize = 4;

/// Controls how requirements are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces before each `--hash=` line.
    pub indent: usize,
    /// Whether to emit `--hash` lines at all.
    pub with_hash: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            with_hash: true,
        }
    }
}

/// A rendered requirements file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    /// The file contents, terminated by a single newline.
    pub contents: String,
    /// Number of requirements in [`Requirements::contents`].
    pub count: usize,
}

impl Dependency {
    /// Render this dependency as a requirement block.
    ///
    /// The block has no trailing newline. Without hashes (or with
    /// `with_hash` unset) it is the single line `name==version[; marker]`.
    pub fn to_requirement(&self, options: RenderOptions) -> String {
        let mut block = format!("{}=={}", self.name, self.version);
        if !self.marker.is_empty() {
            block.push_str("; ");
            block.push_str(&self.marker);
        }

        if !options.with_hash || self.hashes.is_empty() {
            return block;
        }

        let prefix = " ".repeat(options.indent);
        for hash in &self.hashes {
            block.push_str(" \\\n");
            block.push_str(&prefix);
            block.push_str("--hash=");
            block.push_str(hash);
        }
        block
    }
}

/// Render a sequence of dependencies into requirements file contents.
pub fn render_requirements<I>(dependencies: I, options: RenderOptions) -> Requirements
where
    I: IntoIterator,
    I::Item: Borrow<Dependency>,
{
    let blocks: Vec<String> = dependencies
        .into_iter()
        .map(|dep| dep.borrow().to_requirement(options))
        .collect();

    let mut contents = blocks.join("\n");
    contents.push('\n');

    Requirements {
        contents,
        count: blocks.len(),
    }
}

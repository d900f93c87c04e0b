//! Version synchronization between `pyproject.toml` and `package.json`.

pub mod formatter;
pub mod node_package;
pub mod pyproject;
pub mod sync;

pub use formatter::{FormatOutcome, Formatter};
pub use node_package::NodePackage;
pub use sync::{Fallback, SyncOutcome, VersionSync, sync_versions};

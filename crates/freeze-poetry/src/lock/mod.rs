//! `poetry.lock` parsing and `requirements.txt` generation.
//!
//! ## Architecture
//!
//! - [`model`] deserializes the lock document and yields [`Dependency`] values
//!   in lock order, filtered by build profile.
//! - [`dependency`] normalizes a single lock record.
//! - [`requirements`] renders dependencies as hash-pinned requirement blocks.
//! - [`writer`] writes the result only when it differs from what is on disk.
//! - [`freeze`](mod@freeze) ties the steps together for one project.

pub mod dependency;
pub mod freeze;
pub mod model;
pub mod requirements;
pub mod writer;

pub use dependency::Dependency;
pub use freeze::{Frozen, freeze};
pub use model::PoetryLock;
pub use requirements::{RenderOptions, Requirements, render_requirements};
pub use writer::{WriteOutcome, write_if_changed};

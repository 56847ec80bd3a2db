// src/core/mod.rs

//! The central module containing document parsing, path resolution and query evaluation.

pub mod document;
pub mod errors;
pub mod locate;
pub mod query;

pub use document::DocumentNode;
pub use errors::LocateError;
pub use locate::{ByteRange, Locator, resolve_path_range};
pub use query::{MatchResult, evaluate_json_path};

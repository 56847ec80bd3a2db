// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::core::{
    ByteRange, DocumentNode, LocateError, Locator, MatchResult, evaluate_json_path,
    resolve_path_range,
};

/// Build version: `JSONLOC_VERSION` if set at build time, else the package
/// version with the short commit hash appended when built from a git checkout.
pub const VERSION: &str = env!("JSONLOC_BUILD_VERSION");

// src/core/document/mod.rs

//! The offset-preserving document model and its parser.

pub mod node;
pub mod parser;

pub use node::{DocumentNode, ScalarKind};
pub use parser::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, parse_document};

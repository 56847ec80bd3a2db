// src/core/query/mod.rs

//! JSONPath evaluation and the match records handed back to callers.

pub mod engine;
pub mod evaluate;

pub use engine::{MatchDescriptor, query};
pub use evaluate::{MatchResult, evaluate_json_path};

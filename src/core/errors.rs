// src/core/errors.rs

//! Defines the primary error type for path resolution.

use std::sync::Arc;
use thiserror::Error;

/// Every way resolving a match to a byte range can fail.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("object key {segment:?} not found at segment {position}")]
    SegmentNotFound { segment: String, position: usize },

    #[error("invalid array index {segment:?} at segment {position}")]
    InvalidIndex { segment: String, position: usize },

    #[error("array index {index} out of bounds (len {len}) at segment {position}")]
    IndexOutOfBounds {
        index: i64,
        len: usize,
        position: usize,
    },

    #[error("cannot traverse into {kind} with {segment:?} at segment {position}")]
    NotTraversable {
        segment: String,
        position: usize,
        kind: &'static str,
    },

    #[error("invalid range computed: [{start},{end}) for document of {len} bytes")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("key {key:?} not found literally before its value")]
    KeyNotLocated { key: String },

    #[error("failed to parse JSON at byte {offset}: {reason}")]
    DocumentParse { offset: usize, reason: String },

    #[error("document of {len} bytes exceeds the {limit} byte limit")]
    DocumentTooLarge { len: usize, limit: usize },

    #[error("Invalid JSONPath: {0}")]
    InvalidExpression(String),

    #[error("expression returned no results")]
    NoResults,

    #[error("failed to resolve path {path:?}: {source}")]
    Resolution {
        path: String,
        #[source]
        source: Arc<LocateError>,
    },
}

impl LocateError {
    /// Wraps a per-match failure with the path that produced it.
    pub fn for_path(self, path: &str) -> Self {
        LocateError::Resolution {
            path: path.to_string(),
            source: Arc::new(self),
        }
    }

    /// The segment position a structural failure refers to, looking through `Resolution`.
    pub fn segment_position(&self) -> Option<usize> {
        match self {
            LocateError::SegmentNotFound { position, .. }
            | LocateError::InvalidIndex { position, .. }
            | LocateError::IndexOutOfBounds { position, .. }
            | LocateError::NotTraversable { position, .. } => Some(*position),
            LocateError::Resolution { source, .. } => source.segment_position(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LocateError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports line/column in its message; the byte offset is not exposed.
        LocateError::DocumentParse {
            offset: 0,
            reason: e.to_string(),
        }
    }
}

impl From<jsonpath_lib::JsonPathError> for LocateError {
    fn from(e: jsonpath_lib::JsonPathError) -> Self {
        // Sanitize the error message so it stays on a single line.
        let sanitized_error = e.to_string().replace('\n', " ");
        LocateError::InvalidExpression(sanitized_error)
    }
}

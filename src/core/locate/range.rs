// src/core/locate/range.rs

//! Half-open byte ranges and the bounds check applied before one is surfaced.

use crate::core::errors::LocateError;
use serde::Serialize;

/// A half-open interval `[start, end)` of byte offsets into the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if `other` lies entirely within this range.
    pub fn contains(&self, other: &ByteRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slices `text` by this range. `None` if the range is out of bounds or
    /// splits a UTF-8 character.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// Checks that `range` is ordered and lies within a document of `document_len` bytes.
pub fn validate_range(range: ByteRange, document_len: usize) -> Result<ByteRange, LocateError> {
    if range.start > range.end || range.end > document_len {
        return Err(LocateError::InvalidRange {
            start: range.start,
            end: range.end,
            len: document_len,
        });
    }
    Ok(range)
}

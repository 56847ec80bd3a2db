// src/core/locate/key_range.rs

//! Finds the `"key":` token that precedes an object property's value.

use super::range::ByteRange;
use crate::core::document::DocumentNode;
use serde::Serialize;
use tracing::warn;

/// How a key-value range was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMatch {
    /// The literal `"key"` token was found before the value.
    Exact,
    /// The key text was not found literally and the start was estimated from its length.
    Estimated,
}

/// The span from an object property's key token through the end of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    pub range: ByteRange,
    pub key_match: KeyMatch,
}

/// Computes the `"key":value` range for `value`, a member of `parent` named `key`.
///
/// The key token is searched for in the parent's bytes preceding the value,
/// taking the occurrence closest to the value so that an earlier sibling or
/// nested key with the same text is not picked up.
///
/// When the key cannot be found literally (keys whose escaped form differs
/// from their decoded text, e.g. `"a\"b"` or `"\u00e9"`) the start is
/// estimated as `value.start - len("\"key\":")`, clamped to the parent's
/// start. Such ranges are marked `KeyMatch::Estimated` and are only exact
/// when the document has no whitespace around the colon and no escapes.
pub fn locate_key_range(
    doc: &[u8],
    parent: &DocumentNode,
    key: &str,
    value: &DocumentNode,
) -> KeyRange {
    let value_end = value.end() + 1;
    let window_start = parent.start();
    let window_end = value.start().min(doc.len());

    let mut pattern = Vec::with_capacity(key.len() + 2);
    pattern.push(b'"');
    pattern.extend_from_slice(key.as_bytes());
    pattern.push(b'"');

    let found = doc
        .get(window_start..window_end)
        .and_then(|window| rfind(window, &pattern));

    if let Some(offset) = found {
        return KeyRange {
            range: ByteRange::new(window_start + offset, value_end),
            key_match: KeyMatch::Exact,
        };
    }

    // Decoded key length plus two quotes and the colon.
    let key_token_len = key.len() + 3;
    let estimated_start = value
        .start()
        .saturating_sub(key_token_len)
        .max(parent.start());
    warn!(
        "Key {:?} not found in bytes [{}, {}); estimating key start at {}",
        key, window_start, window_end, estimated_start
    );
    KeyRange {
        range: ByteRange::new(estimated_start, value_end),
        key_match: KeyMatch::Estimated,
    }
}

/// Offset of the last occurrence of `needle` in `haystack`.
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

// src/core/locate/walker.rs

//! Follows a segment list through a parsed document.

use super::key_range::{KeyRange, locate_key_range};
use crate::core::document::DocumentNode;
use crate::core::errors::LocateError;

/// The node a path resolved to, plus the key-value range when the final step
/// was a property lookup.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    pub node: &'a DocumentNode,
    pub key_range: Option<KeyRange>,
}

/// Walks `segments` down from `root`.
///
/// Objects look a segment up by property name, arrays parse it as an index
/// and scalars cannot be descended into. An empty segment list resolves to the
/// root with no key range.
pub fn walk<'a, S: AsRef<str>>(
    doc: &[u8],
    root: &'a DocumentNode,
    segments: &[S],
) -> Result<Resolution<'a>, LocateError> {
    let mut cursor = root;
    let mut key_range = None;
    let last = segments.len().saturating_sub(1);

    for (position, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        cursor = match cursor {
            DocumentNode::Object { members, .. } => {
                let Some(next) = members.get(segment) else {
                    return Err(LocateError::SegmentNotFound {
                        segment: segment.to_string(),
                        position,
                    });
                };
                if position == last {
                    key_range = Some(locate_key_range(doc, cursor, segment, next));
                }
                next
            }
            DocumentNode::Array { items, .. } => {
                let index: i64 = segment.parse().map_err(|_| LocateError::InvalidIndex {
                    segment: segment.to_string(),
                    position,
                })?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| items.get(i))
                    .ok_or(LocateError::IndexOutOfBounds {
                        index,
                        len: items.len(),
                        position,
                    })?
            }
            DocumentNode::Scalar { .. } => {
                return Err(LocateError::NotTraversable {
                    segment: segment.to_string(),
                    position,
                    kind: cursor.kind_name(),
                });
            }
        };
    }

    Ok(Resolution {
        node: cursor,
        key_range,
    })
}

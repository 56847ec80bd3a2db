// src/core/document/node.rs

//! The parsed document tree. Every node remembers where it came from in the source bytes.

use crate::core::locate::range::ByteRange;
use indexmap::IndexMap;

/// The type of a leaf value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Bool,
    Null,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Number => "number",
            ScalarKind::Bool => "boolean",
            ScalarKind::Null => "null",
        }
    }
}

/// A node of a parsed JSON document.
///
/// `start` is the offset of the node's first byte and `end` the offset of its
/// last byte, both into the original document. `end` is inclusive: the node's
/// text is `doc[start..=end]`.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    Object {
        start: usize,
        end: usize,
        /// Property names are stored decoded. A repeated key keeps its last value.
        members: IndexMap<String, DocumentNode>,
    },
    Array {
        start: usize,
        end: usize,
        items: Vec<DocumentNode>,
    },
    Scalar {
        start: usize,
        end: usize,
        kind: ScalarKind,
    },
}

impl DocumentNode {
    pub fn start(&self) -> usize {
        match self {
            DocumentNode::Object { start, .. }
            | DocumentNode::Array { start, .. }
            | DocumentNode::Scalar { start, .. } => *start,
        }
    }

    /// Offset of the node's last byte (inclusive).
    pub fn end(&self) -> usize {
        match self {
            DocumentNode::Object { end, .. }
            | DocumentNode::Array { end, .. }
            | DocumentNode::Scalar { end, .. } => *end,
        }
    }

    /// The node's own text as a half-open range.
    pub fn span(&self) -> ByteRange {
        ByteRange::new(self.start(), self.end() + 1)
    }

    /// A short name for the node's type, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocumentNode::Object { .. } => "object",
            DocumentNode::Array { .. } => "array",
            DocumentNode::Scalar { kind, .. } => kind.as_str(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&DocumentNode> {
        match self {
            DocumentNode::Object { members, .. } => members.get(key),
            _ => None,
        }
    }

    pub fn at(&self, index: usize) -> Option<&DocumentNode> {
        match self {
            DocumentNode::Array { items, .. } => items.get(index),
            _ => None,
        }
    }
}

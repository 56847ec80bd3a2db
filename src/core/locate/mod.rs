// src/core/locate/mod.rs

//! Resolves result paths to byte ranges in the original document text.
//!
//! A path goes through four steps: it is split into segments, the segments
//! are walked through the parsed document, a key-value range is computed if
//! the last step was a property lookup, and the final range is checked
//! against the document bounds.

pub mod key_range;
pub mod range;
pub mod segments;
pub mod walker;

pub use key_range::{KeyMatch, KeyRange, locate_key_range};
pub use range::{ByteRange, validate_range};
pub use segments::{join_segments, parse_segments, round_trips};
pub use walker::{Resolution, walk};

use crate::config::ResolverConfig;
use crate::core::document::{DocumentNode, parse_document};
use crate::core::errors::LocateError;
use tracing::debug;

/// A validated range together with how its start was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub range: ByteRange,
    /// `None` when the range is the node's own span (array elements, the root).
    pub key_match: Option<KeyMatch>,
}

/// A parsed document bound to its source text.
///
/// Parse once, then resolve any number of paths. A `Locator` is immutable
/// after construction and can be shared across threads.
#[derive(Debug)]
pub struct Locator<'a> {
    text: &'a str,
    root: DocumentNode,
    strict_key_match: bool,
}

impl<'a> Locator<'a> {
    /// Parses `text` according to `config`.
    pub fn new(text: &'a str, config: &ResolverConfig) -> Result<Self, LocateError> {
        if config.max_document_bytes > 0 && text.len() > config.max_document_bytes {
            return Err(LocateError::DocumentTooLarge {
                len: text.len(),
                limit: config.max_document_bytes,
            });
        }
        let root = parse_document(text.as_bytes(), config.max_depth)?;
        Ok(Self {
            text,
            root,
            strict_key_match: config.strict_key_match,
        })
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn root(&self) -> &DocumentNode {
        &self.root
    }

    /// Resolves `path` to the range a match should be reported at.
    pub fn resolve(&self, path: &str) -> Result<Located, LocateError> {
        self.resolve_segments(&parse_segments(path))
    }

    /// Resolves an already split path. Use this when the segments are known,
    /// since a key containing brackets or quotes cannot always be spelled as
    /// a path string.
    pub fn resolve_segments<S: AsRef<str>>(&self, segments: &[S]) -> Result<Located, LocateError> {
        let resolution = walk(self.text.as_bytes(), &self.root, segments)?;

        let (range, key_match) = match resolution.key_range {
            Some(KeyRange {
                key_match: KeyMatch::Estimated,
                ..
            }) if self.strict_key_match => {
                // Non-empty: a key range only exists after a property lookup.
                let key = segments
                    .last()
                    .map(|s| s.as_ref().to_string())
                    .unwrap_or_default();
                return Err(LocateError::KeyNotLocated { key });
            }
            Some(kr) => (kr.range, Some(kr.key_match)),
            None => (resolution.node.span(), None),
        };

        let range = validate_range(range, self.text.len())?;
        debug!(
            "Resolved {} segments to [{}, {})",
            segments.len(),
            range.start,
            range.end
        );
        Ok(Located { range, key_match })
    }

    /// Resolves each path independently. One failure does not affect the others;
    /// results line up with `paths`.
    pub fn resolve_all<S: AsRef<str>>(&self, paths: &[S]) -> Vec<Result<Located, LocateError>> {
        paths
            .iter()
            .map(|p| self.resolve(p.as_ref()).map_err(|e| e.for_path(p.as_ref())))
            .collect()
    }
}

/// Resolves a single `path` against `document_text` with default settings.
///
/// Errors are returned unwrapped so callers can match on the variant; their
/// messages name the segment position but not the path. Use
/// [`LocateError::for_path`] to attach it, as [`Locator::resolve_all`] does.
pub fn resolve_path_range(document_text: &str, path: &str) -> Result<ByteRange, LocateError> {
    let locator = Locator::new(document_text, &ResolverConfig::default())?;
    locator.resolve(path).map(|located| located.range)
}

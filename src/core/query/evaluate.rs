// src/core/query/evaluate.rs

//! Evaluates a JSONPath expression and attaches exact source locations to every match.

use super::engine::{MatchDescriptor, query};
use crate::config::ResolverConfig;
use crate::core::errors::LocateError;
use crate::core::locate::{KeyMatch, Locator};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, debug_span};

/// A match together with its resolved location in the source text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub descriptor: MatchDescriptor,
    /// Start of the match, inclusive. For object properties this is the opening
    /// quote of the key.
    pub start_location: usize,
    /// End of the match, exclusive.
    pub end_location: usize,
    /// `None` when the location is the value's own span.
    pub key_match: Option<KeyMatch>,
}

/// Runs `expression` over `input` and resolves every match to a byte range.
///
/// Fails with `NoResults` when the expression matches nothing. A match that
/// cannot be resolved fails the whole call with a `Resolution` error naming
/// its path.
pub fn evaluate_json_path(
    expression: &str,
    input: &str,
    config: &ResolverConfig,
) -> Result<Vec<MatchResult>, LocateError> {
    let span = debug_span!("evaluate_json_path", expression);
    let _guard = span.enter();

    let locator = Locator::new(input, config)?;
    let document: Value = serde_json::from_str(input)?;

    let matches = query(expression, &document, input)?;
    if matches.is_empty() {
        return Err(LocateError::NoResults);
    }
    debug!("Expression matched {} values", matches.len());

    matches
        .into_iter()
        .map(|descriptor| -> Result<MatchResult, LocateError> {
            let located = locator
                .resolve_segments(&descriptor.segments)
                .map_err(|e| e.for_path(&descriptor.path))?;
            Ok(MatchResult {
                start_location: located.range.start,
                end_location: located.range.end,
                key_match: located.key_match,
                descriptor,
            })
        })
        .collect()
}

// src/core/query/engine.rs

//! Runs JSONPath expressions through `jsonpath_lib` and reports where each match lives.

use crate::core::errors::LocateError;
use crate::core::locate::join_segments;
use jsonpath_lib::select as find_values_with_jsonpath;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// One match reported by the query engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDescriptor {
    /// Position of the match in document order.
    pub index: usize,
    /// Position of the match in the engine's own output.
    pub original_index: usize,
    /// `$`-rooted path to the matched value, e.g. `$.store.book[0]`. For display;
    /// keys containing brackets or quotes may not split back into `segments`.
    pub path: String,
    /// The keys and indices leading to the value, unescaped.
    #[serde(skip)]
    pub segments: Vec<String>,
    /// The key or array index the value sits under. `None` for the root.
    pub parent_property: Option<String>,
    pub value: Value,
    /// Approximate location of the value in the source text, found by searching
    /// for its compact serialization. Absent when that text does not occur.
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub length: Option<usize>,
}

/// Normalizes the shorthand forms `.` and `.key` to `$`-rooted expressions.
fn normalize_expression(expression: &str) -> String {
    if expression == "." {
        "$".to_string()
    } else if expression.starts_with('.') {
        format!("${expression}")
    } else {
        expression.to_string()
    }
}

/// Evaluates `expression` against `document`, whose source text is `source`.
///
/// Matches are returned in document order.
pub fn query(
    expression: &str,
    document: &Value,
    source: &str,
) -> Result<Vec<MatchDescriptor>, LocateError> {
    let final_expression = normalize_expression(expression);
    let found = find_values_with_jsonpath(document, &final_expression)?;
    if found.is_empty() {
        return Ok(Vec::new());
    }

    let locations = index_values(document);
    let mut matches = Vec::with_capacity(found.len());
    for (original_index, value) in found.into_iter().enumerate() {
        let Some((order, segments)) = locations.get(&(value as *const Value)) else {
            warn!(
                "JSONPath {:?} returned a value that is not part of the document; skipping it",
                expression
            );
            continue;
        };
        let (start, end, length) = match estimate_offsets(source, value) {
            Some((start, end)) => (Some(start), Some(end), Some(end - start)),
            None => (None, None, None),
        };
        matches.push((
            *order,
            MatchDescriptor {
                index: 0,
                original_index,
                path: join_segments(segments),
                segments: segments.clone(),
                parent_property: segments.last().cloned(),
                value: value.clone(),
                start,
                end,
                length,
            },
        ));
    }

    matches.sort_by_key(|(order, _)| *order);
    Ok(matches
        .into_iter()
        .enumerate()
        .map(|(index, (_, descriptor))| MatchDescriptor {
            index,
            ..descriptor
        })
        .collect())
}

/// Maps every value in the tree, by address, to its pre-order position and path segments.
fn index_values(root: &Value) -> HashMap<*const Value, (usize, Vec<String>)> {
    let mut index = HashMap::new();
    let mut stack: Vec<(&Value, Vec<String>)> = vec![(root, Vec::new())];

    while let Some((node, path)) = stack.pop() {
        match node {
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    let mut child_path = path.clone();
                    child_path.push(key.clone());
                    stack.push((child, child_path));
                }
            }
            Value::Array(items) => {
                for (i, child) in items.iter().enumerate().rev() {
                    let mut child_path = path.clone();
                    child_path.push(i.to_string());
                    stack.push((child, child_path));
                }
            }
            _ => {}
        }
        let order = index.len();
        index.insert(node as *const Value, (order, path));
    }
    index
}

/// First occurrence of the value's compact serialization in `source`.
fn estimate_offsets(source: &str, value: &Value) -> Option<(usize, usize)> {
    let text = serde_json::to_string(value).ok()?;
    let start = source.find(&text)?;
    Some((start, start + text.len()))
}

// src/core/locate/segments.rs

//! Splits JSONPath result paths (e.g. `$.a[1].b` or `$['a'][1]`) into raw segments.

/// Splits a result path into its segments, left to right.
///
/// A single leading `$` and the `.` after it are dropped. Dots separate
/// segments except inside brackets; bracket contents become one segment with
/// surrounding quote characters trimmed. Segments are untyped: whether `"1"`
/// is a key or an index is decided by the node it is applied to.
///
/// This never fails. Malformed input produces a best-effort list and the
/// walker reports whatever does not resolve.
pub fn parse_segments(path: &str) -> Vec<String> {
    let rest = path.strip_prefix('$').unwrap_or(path);
    let rest = rest.strip_prefix('.').unwrap_or(rest);

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in rest.chars() {
        match c {
            '.' if !in_bracket => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                in_bracket = true;
            }
            ']' if in_bracket => {
                let raw = std::mem::take(&mut current);
                segments.push(raw.trim_matches(['\'', '"']).to_string());
                in_bracket = false;
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Joins segments into a `$`-rooted display path.
///
/// Identifier-like segments use dot notation, all-digit segments use `[n]`
/// and everything else is written as a quoted bracket segment. Quotes are not
/// escaped, so `parse_segments` only splits the result back into the same
/// segments when [`round_trips`] holds for each of them.
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let mut path = String::from("$");
    for segment in segments {
        let segment = segment.as_ref();
        if is_identifier(segment) {
            path.push('.');
            path.push_str(segment);
        } else if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            path.push('[');
            path.push_str(segment);
            path.push(']');
        } else if segment.contains('\'') {
            path.push_str("[\"");
            path.push_str(segment);
            path.push_str("\"]");
        } else {
            path.push_str("['");
            path.push_str(segment);
            path.push_str("']");
        }
    }
    path
}

/// Whether `join_segments` writes `segment` in a form `parse_segments` reads
/// back unchanged. Brackets, a leading or trailing quote, and a mix of both
/// quote kinds do not survive.
pub fn round_trips(segment: &str) -> bool {
    !segment.contains(['[', ']'])
        && !segment.starts_with(['\'', '"'])
        && !segment.ends_with(['\'', '"'])
        && !(segment.contains('\'') && segment.contains('"'))
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

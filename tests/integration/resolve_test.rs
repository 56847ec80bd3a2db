// tests/integration/resolve_test.rs

//! End-to-end tests for resolving result paths to byte ranges.

use super::fixtures::{AWKWARD_KEYS, STORE_COMPACT, STORE_PRETTY, patterns};
use super::test_helpers::{init_tracing, text_at};
use jsonloc::config::ResolverConfig;
use jsonloc::core::locate::KeyMatch;
use jsonloc::{ByteRange, LocateError, Locator, resolve_path_range};

// ===== Scenarios =====

#[test]
fn test_object_property_spans_key_and_value() {
    let doc = r#"{"a":{"b":42}}"#;
    let range = resolve_path_range(doc, "$.a.b").unwrap();
    assert_eq!(range, ByteRange::new(6, 12));
    assert_eq!(text_at(doc, range), r#""b":42"#);
}

#[test]
fn test_array_index_spans_value_only() {
    let doc = r#"{"a":[10,20,30]}"#;
    let range = resolve_path_range(doc, "$.a[1]").unwrap();
    assert_eq!(range, ByteRange::new(9, 11));
    assert_eq!(text_at(doc, range), "20");
}

#[test]
fn test_missing_key() {
    assert_eq!(
        resolve_path_range(r#"{"a":1}"#, "$.b").unwrap_err(),
        LocateError::SegmentNotFound {
            segment: "b".to_string(),
            position: 0
        }
    );
}

#[test]
fn test_out_of_bounds_index() {
    let err = resolve_path_range(r#"{"a":[1,2]}"#, "$.a[5]").unwrap_err();
    assert!(matches!(err, LocateError::IndexOutOfBounds { index: 5, .. }));
    assert_eq!(err.segment_position(), Some(1));
}

#[test]
fn test_traverse_into_scalar() {
    let err = resolve_path_range(r#"{"a":1}"#, "$.a.b").unwrap_err();
    assert!(matches!(err, LocateError::NotTraversable { position: 1, .. }));
    assert!(err.to_string().contains("segment 1"));
}

#[test]
fn test_non_numeric_index() {
    let err = resolve_path_range("[1]", "$[first]").unwrap_err();
    assert_eq!(
        err,
        LocateError::InvalidIndex {
            segment: "first".to_string(),
            position: 0
        }
    );
}

#[test]
fn test_malformed_document() {
    let err = resolve_path_range(r#"{"a":[1,2}"#, "$.a").unwrap_err();
    assert!(matches!(err, LocateError::DocumentParse { offset: 9, .. }));
}

// ===== Layout independence =====

#[test]
fn test_pretty_and_compact_cover_the_same_values() {
    let cases = [
        ("$.store.book[1].isbn", r#""isbn""#, r#""0-553""#),
        ("$.store.bicycle", r#""bicycle""#, "}"),
        ("$.expensive", r#""expensive""#, "10"),
    ];
    for doc in [STORE_COMPACT, STORE_PRETTY] {
        for (path, head, tail) in cases {
            let text = text_at(doc, resolve_path_range(doc, path).unwrap());
            assert!(text.starts_with(head), "{path}: {text:?}");
            assert!(text.ends_with(tail), "{path}: {text:?}");
        }
    }
}

#[test]
fn test_pretty_printed_key_range_keeps_inner_whitespace() {
    let range = resolve_path_range(STORE_PRETTY, "$.store.bicycle.color").unwrap();
    assert_eq!(text_at(STORE_PRETTY, range), r#""color": "red""#);
}

#[test]
fn test_array_element_object_is_value_span() {
    let range = resolve_path_range(STORE_COMPACT, "$.store.book[0]").unwrap();
    assert_eq!(
        text_at(STORE_COMPACT, range),
        r#"{"title":"Sayings","price":8.95}"#
    );
}

#[test]
fn test_bracket_notation_and_quotes() {
    let doc = STORE_COMPACT;
    let dotted = resolve_path_range(doc, "$.store.book[1].title").unwrap();
    let bracketed = resolve_path_range(doc, "$['store']['book'][1][\"title\"]").unwrap();
    assert_eq!(dotted, bracketed);
}

// ===== Awkward keys =====

#[test]
fn test_key_containing_dot() {
    let range = resolve_path_range(AWKWARD_KEYS, "$['a.b']").unwrap();
    assert_eq!(text_at(AWKWARD_KEYS, range), r#""a.b":1"#);
}

#[test]
fn test_key_containing_space() {
    let range = resolve_path_range(AWKWARD_KEYS, "$['with space'][0]").unwrap();
    assert_eq!(text_at(AWKWARD_KEYS, range), "true");
}

#[test]
fn test_empty_key() {
    let range = resolve_path_range(AWKWARD_KEYS, "$['']").unwrap();
    assert_eq!(text_at(AWKWARD_KEYS, range), r#""":0"#);
}

#[test]
fn test_escaped_keys_are_estimated() {
    init_tracing();
    let locator = Locator::new(AWKWARD_KEYS, &ResolverConfig::default()).unwrap();

    // `quo\"te` is 7 raw bytes, `quo"te` 6 decoded: the estimate starts one byte late.
    let located = locator.resolve("$['quo\"te']").unwrap();
    assert_eq!(located.key_match, Some(KeyMatch::Estimated));
    assert_eq!(text_at(AWKWARD_KEYS, located.range), r#"quo\"te":"q""#);

    // Each `é` is 6 raw bytes for 2 decoded ones.
    let located = locator.resolve("$['été']").unwrap();
    assert_eq!(located.key_match, Some(KeyMatch::Estimated));
    assert!(text_at(AWKWARD_KEYS, located.range).ends_with(r#"":"summer""#));
}

#[test]
fn test_unicode_keys_found_literally() {
    let doc = patterns::UNICODE_DOC;
    let locator = Locator::new(doc, &ResolverConfig::default()).unwrap();

    let located = locator.resolve("$['名前']").unwrap();
    assert_eq!(located.key_match, Some(KeyMatch::Exact));
    assert_eq!(text_at(doc, located.range), r#""名前":"世界""#);

    let located = locator.resolve("$.nested['ключ'][1]").unwrap();
    assert_eq!(text_at(doc, located.range), r#""два""#);
}

#[test]
fn test_nearest_key_token_is_used() {
    let doc = patterns::SHADOWED_KEYS;
    let range = resolve_path_range(doc, "$.id.id.id").unwrap();
    assert_eq!(text_at(doc, range), r#""id":1"#);

    let range = resolve_path_range(doc, "$.id").unwrap();
    assert_eq!(text_at(doc, range), r#""id":{"id":{"id":1}}"#);
}

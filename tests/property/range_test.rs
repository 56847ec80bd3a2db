// tests/property/range_test.rs

//! Property-based tests for resolved ranges
//! Every path into a generated document must resolve to text that parses back to its value

use crate::test_helpers::{init_tracing, text_at};
use jsonloc::Locator;
use jsonloc::config::ResolverConfig;
use jsonloc::core::locate::{KeyMatch, join_segments, walk};
use proptest::prelude::*;
use serde_json::Value;

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        ".{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z_]{1,6}", inner), 0..6)
                .prop_map(|members| Value::Object(members.into_iter().collect())),
        ]
    })
}

/// A value in the generated tree, the segments leading to it and whether it
/// is an object member.
struct Entry<'v> {
    segments: Vec<String>,
    value: &'v Value,
    under_object: bool,
}

fn collect_paths<'v>(value: &'v Value, segments: &mut Vec<String>, under_object: bool, out: &mut Vec<Entry<'v>>) {
    out.push(Entry {
        segments: segments.clone(),
        value,
        under_object,
    });
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                segments.push(key.clone());
                collect_paths(child, segments, true, out);
                segments.pop();
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                segments.push(i.to_string());
                collect_paths(child, segments, false, out);
                segments.pop();
            }
        }
        _ => {}
    }
}

fn entries(root: &Value) -> Vec<Entry<'_>> {
    let mut out = Vec::new();
    collect_paths(root, &mut Vec::new(), false, &mut out);
    out
}

/// The value's own text inside a `"key": value` range.
fn value_text<'a>(text: &'a str, key: &str) -> &'a str {
    let after_key = &text[key.len() + 2..];
    after_key
        .strip_prefix(':')
        .unwrap_or_else(|| panic!("no colon after key in {text:?}"))
        .trim_start()
}

fn check_document(doc: &str, root: &Value) {
    let locator = Locator::new(doc, &ResolverConfig::default()).unwrap();

    for entry in entries(root) {
        let path = join_segments(&entry.segments);
        let located = locator.resolve(&path).unwrap();
        assert!(located.range.end <= doc.len());
        let text = text_at(doc, located.range);

        let value_part = if entry.under_object {
            assert_eq!(located.key_match, Some(KeyMatch::Exact), "{path}");
            let key = entry.segments.last().unwrap();
            assert!(text.starts_with(&format!("\"{key}\"")), "{path}: {text:?}");
            value_text(text, key)
        } else {
            assert_eq!(located.key_match, None, "{path}");
            text
        };

        let reparsed: Value = serde_json::from_str(value_part)
            .unwrap_or_else(|e| panic!("{path}: {value_part:?} does not parse: {e}"));
        assert_eq!(&reparsed, entry.value, "{path}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        max_shrink_iters: 500,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_every_path_resolves_to_its_value(root in json_value()) {
        init_tracing();
        let compact = serde_json::to_string(&root).unwrap();
        check_document(&compact, &root);
        let pretty = serde_json::to_string_pretty(&root).unwrap();
        check_document(&pretty, &root);
    }

    #[test]
    fn test_key_range_ends_with_value_span(root in json_value()) {
        let doc = serde_json::to_string_pretty(&root).unwrap();
        let locator = Locator::new(&doc, &ResolverConfig::default()).unwrap();

        for entry in entries(&root) {
            let resolution = walk(doc.as_bytes(), locator.root(), &entry.segments).unwrap();
            let value_span = resolution.node.span();
            match resolution.key_range {
                Some(key_range) => {
                    prop_assert!(key_range.range.start < value_span.start);
                    prop_assert_eq!(key_range.range.end, value_span.end);
                }
                None => prop_assert!(!entry.under_object),
            }
        }
    }

    #[test]
    fn test_resolution_is_deterministic(root in json_value()) {
        let doc = serde_json::to_string(&root).unwrap();
        let paths: Vec<String> = entries(&root)
            .iter()
            .map(|entry| join_segments(&entry.segments))
            .collect();

        let first = Locator::new(&doc, &ResolverConfig::default()).unwrap();
        let second = Locator::new(&doc, &ResolverConfig::default()).unwrap();
        prop_assert_eq!(first.resolve_all(&paths), second.resolve_all(&paths));
    }
}

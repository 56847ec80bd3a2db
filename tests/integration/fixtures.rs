// tests/integration/fixtures.rs

//! Common test documents
//!
//! Fixtures provide reusable documents for:
//! - Consistency: resolving the same text across different tests
//! - Readability: clear names for the shapes under test

/// A compact document with nested objects and arrays.
pub const STORE_COMPACT: &str = r#"{"store":{"book":[{"title":"Sayings","price":8.95},{"title":"Sword","price":12.99,"isbn":"0-553"}],"bicycle":{"color":"red","price":19.95}},"expensive":10}"#;

/// The same data, pretty-printed with two-space indentation.
pub const STORE_PRETTY: &str = r#"{
  "store": {
    "book": [
      {
        "title": "Sayings",
        "price": 8.95
      },
      {
        "title": "Sword",
        "price": 12.99,
        "isbn": "0-553"
      }
    ],
    "bicycle": {
      "color": "red",
      "price": 19.95
    }
  },
  "expensive": 10
}"#;

/// Keys that need bracket notation or escapes.
pub const AWKWARD_KEYS: &str = r#"{"a.b":1,"with space":[true],"quo\"te":"q","\u00e9t\u00e9":"summer","":0}"#;

/// Common test patterns
pub mod patterns {
    /// Multi-byte UTF-8 in both keys and values.
    pub const UNICODE_DOC: &str = r#"{"名前":"世界","emoji":"🌍","nested":{"ключ":[1,"два"]}}"#;

    /// A document whose object has the same key text nested inside earlier siblings.
    pub const SHADOWED_KEYS: &str = r#"{"id":{"id":{"id":1}},"note":"\"id\"","id2":2}"#;
}

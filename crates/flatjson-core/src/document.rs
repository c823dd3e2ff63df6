//! The document model shared by both transformations.
//!
//! A [`Document`] is a JSON object: string keys mapped to `serde_json::Value`.
//! `Value::Object` is the only variant either transformation recurses into;
//! null, booleans, numbers, strings and arrays are leaves.

use serde_json::{Map, Value};
use std::str::Split;

/// A mapping from string keys to JSON values.
///
/// Equality is order-independent, so two documents holding the same entries
/// in a different order compare equal.
pub type Document = Map<String, Value>;

/// Joins nested key segments into a flat key.
pub const SEPARATOR: char = '.';

/// Returns `true` if no value in `doc` is itself a nested document.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use flatjson_core::is_flat;
///
/// let doc = json!({"a.b": 1, "c": [{"d": 2}]});
/// assert!(is_flat(doc.as_object().unwrap()));
/// ```
pub fn is_flat(doc: &Document) -> bool {
    doc.values().all(|value| !value.is_object())
}

/// Join a path prefix and a key with [`SEPARATOR`].
///
/// An empty prefix yields the key unchanged, and an empty key yields the
/// prefix unchanged.
pub fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        return key.to_string();
    }
    if key.is_empty() {
        return prefix.to_string();
    }
    let mut joined = String::with_capacity(prefix.len() + 1 + key.len());
    joined.push_str(prefix);
    joined.push(SEPARATOR);
    joined.push_str(key);
    joined
}

/// Split a flat key into its path segments.
///
/// Always yields at least one segment. Empty segments (`"a..b"`, `"."`) are kept.
pub fn split_key(key: &str) -> Split<'_, char> {
    key.split(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_with_empty_prefix_returns_key() {
        assert_eq!(join_key("", "name"), "name");
    }

    #[test]
    fn join_with_empty_key_returns_prefix() {
        assert_eq!(join_key("name", ""), "name");
    }

    #[test]
    fn join_inserts_separator() {
        assert_eq!(join_key("a.b", "c"), "a.b.c");
    }

    #[test]
    fn split_without_separator_is_single_segment() {
        assert_eq!(split_key("name").collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn split_keeps_empty_segments() {
        assert_eq!(split_key("a..b").collect::<Vec<_>>(), vec!["a", "", "b"]);
        assert_eq!(split_key("").collect::<Vec<_>>(), vec![""]);
    }
}

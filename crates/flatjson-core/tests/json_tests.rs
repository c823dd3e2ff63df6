//! JSON text wrapper tests: decode failures, encode output and options parsing.

use flatjson_core::json::{decode, encode};
use flatjson_core::{
    flatten_json, flatten_json_with, unflatten_json, unflatten_json_with, ConflictPolicy,
    FlatError, Options,
};

/// Compare two JSON texts as values, ignoring formatting and key order.
fn assert_json_eq(got: &str, want: &str) {
    let got_value: serde_json::Value = serde_json::from_str(got).unwrap();
    let want_value: serde_json::Value = serde_json::from_str(want).unwrap();
    assert_eq!(got_value, want_value, "\n  got:  {got}\n  want: {want}");
}

// ============================================================================
// 1. Flatten text
// ============================================================================

#[test]
fn flatten_json_scalars() {
    let got = flatten_json(
        r#"{
            "number": 1.4567,
            "bool":   true
        }"#,
    )
    .unwrap();
    assert_json_eq(&got, r#"{"number": 1.4567, "bool": true}"#);
}

#[test]
fn flatten_json_nested_name() {
    let got = flatten_json(r#"{"name": {"first_name": "John", "last_name": "Doe"}}"#).unwrap();
    assert_json_eq(&got, r#"{"name.first_name": "John", "name.last_name": "Doe"}"#);
}

#[test]
fn flatten_json_deep() {
    let got = flatten_json(r#"{"a": {"b": {"d": {"e": {"c": "c"}}}, "c": "c"}}"#).unwrap();
    assert_json_eq(&got, r#"{"a.b.d.e.c": "c", "a.c": "c"}"#);
}

#[test]
fn flatten_json_output_is_compact() {
    let got = flatten_json(r#"{ "a" : { "b" : 1 } }"#).unwrap();
    assert_eq!(got, r#"{"a.b":1}"#);
}

// ============================================================================
// 2. Unflatten text
// ============================================================================

#[test]
fn unflatten_json_synthesizes_paths() {
    let got = unflatten_json(r#"{"a.b.c": "c", "a.c": "c"}"#).unwrap();
    assert_json_eq(&got, r#"{"a": {"b": {"c": "c"}, "c": "c"}}"#);
}

#[test]
fn json_roundtrip_preserves_document() {
    let input = r#"{"user":{"name":"Ann","roles":["admin","dev"],"meta":{"age":41,"vip":false}}}"#;
    let flat = flatten_json(input).unwrap();
    let back = unflatten_json(&flat).unwrap();
    assert_json_eq(&back, input);
}

// ============================================================================
// 3. Decode errors
// ============================================================================

#[test]
fn flatten_json_rejects_malformed_text() {
    let err = flatten_json(r#"{"a": {"b": 1}"#).unwrap_err();
    assert!(matches!(err, FlatError::Decode(_)), "got {err:?}");
}

#[test]
fn unflatten_json_rejects_malformed_text() {
    let err = unflatten_json("not json").unwrap_err();
    assert!(matches!(err, FlatError::Decode(_)), "got {err:?}");
}

#[test]
fn empty_text_is_a_decode_error() {
    assert!(matches!(flatten_json(""), Err(FlatError::Decode(_))));
    assert!(matches!(unflatten_json(""), Err(FlatError::Decode(_))));
}

#[test]
fn top_level_array_is_a_decode_error() {
    assert!(matches!(flatten_json("[1, 2]"), Err(FlatError::Decode(_))));
}

#[test]
fn top_level_scalar_is_a_decode_error() {
    assert!(matches!(unflatten_json("42"), Err(FlatError::Decode(_))));
    assert!(matches!(flatten_json("null"), Err(FlatError::Decode(_))));
}

#[test]
fn decode_error_message_names_json() {
    let err = flatten_json("{").unwrap_err();
    assert!(err.to_string().starts_with("JSON decode error"), "got {err}");
}

// ============================================================================
// 4. Codec helpers
// ============================================================================

#[test]
fn decode_then_encode_keeps_key_order() {
    let text = r#"{"z":1,"a":{"m":2,"b":3}}"#;
    assert_eq!(encode(&decode(text).unwrap()).unwrap(), text);
}

// ============================================================================
// 5. Options
// ============================================================================

#[test]
fn options_default_overwrites() {
    assert_eq!(Options::default().on_conflict, ConflictPolicy::Overwrite);
}

#[test]
fn options_parse_from_camel_case_json() {
    let opts: Options = serde_json::from_str(r#"{"onConflict": "error"}"#).unwrap();
    assert_eq!(opts, Options::strict());
}

#[test]
fn options_missing_fields_take_defaults() {
    let opts: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, Options::default());
}

#[test]
fn options_serialize_to_camel_case_json() {
    let text = serde_json::to_string(&Options::strict()).unwrap();
    assert_eq!(text, r#"{"onConflict":"error"}"#);
}

#[test]
fn strict_text_wrappers_report_conflicts() {
    let strict = Options::strict();
    assert!(matches!(
        flatten_json_with(r#"{"a.b": 1, "a": {"b": 2}}"#, &strict),
        Err(FlatError::Conflict { .. })
    ));
    assert!(matches!(
        unflatten_json_with(r#"{"a": 1, "a.b": 2}"#, &strict),
        Err(FlatError::Conflict { .. })
    ));
}

#[test]
fn strict_text_wrappers_still_report_decode_errors_first() {
    let err = flatten_json_with("{oops}", &Options::strict()).unwrap_err();
    assert!(matches!(err, FlatError::Decode(_)));
}

//! JSON text wrappers — decode, transform, encode.
//!
//! These are thin shells over `serde_json`. The input text must be a JSON
//! object; a top-level array or scalar is a decode error, as is any syntax
//! error. No partial result is ever returned.

use crate::document::Document;
use crate::error::{FlatError, Result};
use crate::flatten::flatten_with;
use crate::options::Options;
use crate::unflatten::unflatten_with;

/// Flatten a JSON object given as text, returning compact JSON text.
///
/// # Errors
///
/// Returns [`FlatError::Decode`] if the input is not a JSON object.
///
/// # Examples
///
/// ```
/// use flatjson_core::flatten_json;
///
/// let flat = flatten_json(r#"{"a":{"b":"c","d":"e"}}"#).unwrap();
/// assert_eq!(flat, r#"{"a.b":"c","a.d":"e"}"#);
/// ```
pub fn flatten_json(json: &str) -> Result<String> {
    flatten_json_with(json, &Options::default())
}

/// Flatten a JSON object given as text under the given [`Options`].
pub fn flatten_json_with(json: &str, options: &Options) -> Result<String> {
    let doc = decode(json)?;
    encode(&flatten_with(&doc, options)?)
}

/// Unflatten a flat JSON object given as text, returning compact JSON text.
///
/// # Errors
///
/// Returns [`FlatError::Decode`] if the input is not a JSON object.
///
/// # Examples
///
/// ```
/// use flatjson_core::unflatten_json;
///
/// let nested = unflatten_json(r#"{"a.b.c":"c","a.c":"c"}"#).unwrap();
/// assert_eq!(nested, r#"{"a":{"b":{"c":"c"},"c":"c"}}"#);
/// ```
pub fn unflatten_json(json: &str) -> Result<String> {
    unflatten_json_with(json, &Options::default())
}

/// Unflatten a flat JSON object given as text under the given [`Options`].
pub fn unflatten_json_with(json: &str, options: &Options) -> Result<String> {
    let doc = decode(json)?;
    encode(&unflatten_with(&doc, options)?)
}

/// Parse JSON text into a [`Document`].
pub fn decode(json: &str) -> Result<Document> {
    serde_json::from_str(json).map_err(FlatError::Decode)
}

/// Serialize a [`Document`] as compact JSON text.
pub fn encode(doc: &Document) -> Result<String> {
    serde_json::to_string(doc).map_err(FlatError::Encode)
}

//! Flattener — collapses nested documents into one level of dot-joined keys.
//!
//! The walk is depth-first and folds every leaf into a single output map:
//!
//! ```text
//! {"a": {"b": "c", "d": {"e": 1}}, "f": [{"g": 2}]}
//!   →  {"a.b": "c", "a.d.e": 1, "f": [{"g": 2}]}
//! ```
//!
//! Arrays are leaves, so the `{"g": 2}` above keeps its nesting. An empty
//! nested document has no leaves and contributes no keys.

use crate::document::{join_key, Document};
use crate::error::{FlatError, Result};
use crate::options::{ConflictPolicy, Options};
use serde_json::Value;
use tracing::{debug, trace};

/// Flatten `doc` into a new single-level document.
///
/// Never fails. When two paths produce the same flat key, the entry visited
/// last overwrites the earlier one. Entries are visited in document order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use flatjson_core::flatten;
///
/// let doc = json!({"a": {"b": "c", "d": "e"}});
/// let flat = flatten(doc.as_object().unwrap());
/// assert_eq!(flat, *json!({"a.b": "c", "a.d": "e"}).as_object().unwrap());
/// ```
pub fn flatten(doc: &Document) -> Document {
    match flatten_with(doc, &Options::default()) {
        Ok(flat) => flat,
        Err(err) => unreachable!("overwrite policy never reports conflicts: {err}"),
    }
}

/// Flatten `doc` under the given [`Options`].
///
/// # Errors
///
/// With [`ConflictPolicy::Error`], returns [`FlatError::Conflict`] naming the
/// first flat key that two entries both produce.
pub fn flatten_with(doc: &Document, options: &Options) -> Result<Document> {
    let mut out = Document::new();
    flatten_into("", doc, &mut out, options.on_conflict)?;
    trace!(input = doc.len(), output = out.len(), "flattened document");
    Ok(out)
}

fn flatten_into(
    prefix: &str,
    doc: &Document,
    out: &mut Document,
    policy: ConflictPolicy,
) -> Result<()> {
    for (key, value) in doc {
        let flat_key = join_key(prefix, key);
        match value {
            Value::Object(child) => flatten_into(&flat_key, child, out, policy)?,
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_) => insert_leaf(out, flat_key, value.clone(), policy)?,
        }
    }
    Ok(())
}

fn insert_leaf(
    out: &mut Document,
    flat_key: String,
    value: Value,
    policy: ConflictPolicy,
) -> Result<()> {
    if out.contains_key(&flat_key) {
        match policy {
            ConflictPolicy::Error => return Err(FlatError::Conflict { key: flat_key }),
            ConflictPolicy::Overwrite => {
                debug!(key = %flat_key, "flat key produced twice, keeping the later value");
            }
        }
    }
    out.insert(flat_key, value);
    Ok(())
}

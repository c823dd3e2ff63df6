//! Unflattener — rebuilds nested documents from dot-joined keys.
//!
//! Each key is split on the separator and its value is placed at the end of
//! that path, creating intermediate documents as needed:
//!
//! ```text
//! {"a.b.c": "c", "a.c": "c"}  →  {"a": {"b": {"c": "c"}, "c": "c"}}
//! ```
//!
//! Only keys are inspected. Values, including nested documents and arrays,
//! are moved into place untouched.
//!
//! # Conflicting keys
//!
//! Keys like `"a"` and `"a.b"` disagree on whether `a` is a leaf or a
//! document. Under [`ConflictPolicy::Overwrite`] the key processed later wins:
//! a leaf standing where a document is needed is replaced by a fresh document,
//! and a document standing where a leaf is assigned is replaced by the leaf.
//! An existing document at an intermediate segment is merged into. Under
//! [`ConflictPolicy::Error`] every such clash is reported instead.

use crate::document::{split_key, Document, SEPARATOR};
use crate::error::{FlatError, Result};
use crate::options::{ConflictPolicy, Options};
use serde_json::Value;
use tracing::{debug, trace};

/// Rebuild nested structure from the keys of `doc`.
///
/// Never fails; conflicting keys are resolved last-write-wins in document order.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use flatjson_core::unflatten;
///
/// let flat = json!({"a.b.c": "c", "a.c": "c"});
/// let nested = unflatten(flat.as_object().unwrap());
/// assert_eq!(nested, *json!({"a": {"b": {"c": "c"}, "c": "c"}}).as_object().unwrap());
/// ```
pub fn unflatten(doc: &Document) -> Document {
    match unflatten_with(doc, &Options::default()) {
        Ok(nested) => nested,
        Err(err) => unreachable!("overwrite policy never reports conflicts: {err}"),
    }
}

/// Rebuild nested structure from the keys of `doc` under the given [`Options`].
///
/// # Errors
///
/// With [`ConflictPolicy::Error`], returns [`FlatError::Conflict`] naming the
/// dotted path at which two keys disagree on the structure.
pub fn unflatten_with(doc: &Document, options: &Options) -> Result<Document> {
    let mut out = Document::new();
    for (key, value) in doc {
        insert_path(&mut out, key, value.clone(), options.on_conflict)?;
    }
    trace!(input = doc.len(), output = out.len(), "unflattened document");
    Ok(out)
}

/// Place `value` at the path spelled by `key`, creating documents on the way.
fn insert_path(out: &mut Document, key: &str, value: Value, policy: ConflictPolicy) -> Result<()> {
    let segments: Vec<&str> = split_key(key).collect();
    let Some((leaf, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut node = out;
    for (depth, segment) in parents.iter().enumerate() {
        let slot = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Document::new()));
        if !slot.is_object() {
            let path = join_segments(&parents[..=depth]);
            match policy {
                ConflictPolicy::Error => return Err(FlatError::Conflict { key: path }),
                ConflictPolicy::Overwrite => {
                    debug!(key = %path, "replacing leaf value with a nested document");
                    *slot = Value::Object(Document::new());
                }
            }
        }
        node = match slot {
            Value::Object(child) => child,
            _ => unreachable!("slot holds a document after the conflict check"),
        };
    }

    if node.contains_key(*leaf) {
        match policy {
            ConflictPolicy::Error => {
                return Err(FlatError::Conflict {
                    key: key.to_string(),
                })
            }
            ConflictPolicy::Overwrite => {
                debug!(key = %key, "path already holds a value, keeping the later one");
            }
        }
    }
    node.insert(leaf.to_string(), value);
    Ok(())
}

fn join_segments(segments: &[&str]) -> String {
    let mut buf = [0u8; 4];
    segments.join(SEPARATOR.encode_utf8(&mut buf))
}

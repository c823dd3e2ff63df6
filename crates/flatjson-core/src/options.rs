//! Per-call configuration for both transformations.

use serde::{Deserialize, Serialize};

/// What to do when two entries claim the same key path.
///
/// In flatten, a conflict is a flat key produced twice (e.g. a literal
/// `"a.b"` key next to a nested `{"a": {"b": ..}}`). In unflatten, it is a
/// path that needs a nested document where a leaf already sits, or the
/// other way round (e.g. both `"a"` and `"a.b"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// The entry processed last wins; the earlier value is discarded.
    #[default]
    Overwrite,
    /// Fail with [`FlatError::Conflict`](crate::FlatError::Conflict).
    Error,
}

/// Options accepted by [`flatten_with`](crate::flatten_with) and
/// [`unflatten_with`](crate::unflatten_with).
///
/// Deserializes from JSON such as `{"onConflict": "error"}`; missing fields
/// take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub on_conflict: ConflictPolicy,
}

impl Options {
    /// Options that report conflicts instead of overwriting.
    pub fn strict() -> Self {
        Self {
            on_conflict: ConflictPolicy::Error,
        }
    }
}

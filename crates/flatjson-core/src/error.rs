//! Error types for flattening and unflattening operations.

use thiserror::Error;

/// Errors that can occur around a flatten or unflatten call.
///
/// The transformations themselves only fail under [`ConflictPolicy::Error`];
/// decode and encode failures come from the JSON text wrappers.
///
/// [`ConflictPolicy::Error`]: crate::ConflictPolicy::Error
#[derive(Error, Debug)]
pub enum FlatError {
    /// The input text was not a valid JSON object.
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The resulting document could not be serialized back to JSON text.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// Two entries claimed the same key path (strict mode only).
    #[error("conflicting entries at key '{key}'")]
    Conflict { key: String },
}

/// Convenience alias used throughout flatjson-core.
pub type Result<T> = std::result::Result<T, FlatError>;

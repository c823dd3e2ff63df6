//! # flatjson-core
//!
//! Flatten nested JSON objects into a single level of dot-joined keys, and
//! rebuild the nesting from those keys.
//!
//! Flat key/value shapes are what form fields, flat key-value stores and
//! environment-style configuration expect, while the canonical data is a
//! hierarchical JSON tree. This crate converts between the two.
//!
//! ## Quick start
//!
//! ```rust
//! use flatjson_core::{flatten_json, unflatten_json};
//!
//! // nested → flat
//! let flat = flatten_json(r#"{"name":{"first":"John","last":"Doe"}}"#).unwrap();
//! assert_eq!(flat, r#"{"name.first":"John","name.last":"Doe"}"#);
//!
//! // flat → nested
//! let nested = unflatten_json(&flat).unwrap();
//! assert_eq!(nested, r#"{"name":{"first":"John","last":"Doe"}}"#);
//! ```
//!
//! Both transformations also work directly on in-memory [`Document`]s via
//! [`flatten()`] and [`unflatten()`], with no text round trip.
//!
//! ## Modules
//!
//! - [`document`] — `Document` alias and key path helpers
//! - [`flatten`](mod@flatten) — nested `Document` → flat `Document`
//! - [`unflatten`](mod@unflatten) — flat `Document` → nested `Document`
//! - [`options`] — conflict policy (`Overwrite` by default, or `Error`)
//! - [`json`] — JSON text wrappers around both transformations
//! - [`error`] — Error types for decode, encode and conflict failures
//!
//! ## Arrays
//!
//! Arrays are leaves. They are copied under their path key as-is and never
//! descended into, so objects inside an array keep their nesting.

pub mod document;
pub mod error;
pub mod flatten;
pub mod json;
pub mod options;
pub mod unflatten;

pub use document::{is_flat, Document, SEPARATOR};
pub use error::FlatError;
pub use flatten::{flatten, flatten_with};
pub use json::{flatten_json, flatten_json_with, unflatten_json, unflatten_json_with};
pub use options::{ConflictPolicy, Options};
pub use unflatten::{unflatten, unflatten_with};

//! # flatjson-python
//!
//! Python bindings for flatjson-core, built with PyO3.
//!
//! Exposes the following functions to Python as the `flatjson` module:
//!
//! - `flatten(json, strict=False)` -- nested JSON string -> flat JSON string
//! - `unflatten(json, strict=False)` -- flat JSON string -> nested JSON string

use flatjson_core::Options;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn options(strict: bool) -> Options {
    if strict {
        Options::strict()
    } else {
        Options::default()
    }
}

/// Flatten a nested JSON object into dot-joined keys.
///
/// Args:
///     json: A JSON object as a string.
///     strict: Raise instead of overwriting when two paths produce the same key.
///
/// Returns:
///     The flat JSON string.
///
/// Raises:
///     ValueError: If the input is not a JSON object, or on a conflict in strict mode.
#[pyfunction]
#[pyo3(signature = (json, strict=false))]
fn flatten(json: &str, strict: bool) -> PyResult<String> {
    flatjson_core::flatten_json_with(json, &options(strict))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Rebuild a nested JSON object from dot-joined keys.
///
/// Args:
///     json: A flat JSON object as a string.
///     strict: Raise instead of overwriting when keys disagree on the structure
///         (e.g. both "a" and "a.b" present).
///
/// Returns:
///     The nested JSON string.
///
/// Raises:
///     ValueError: If the input is not a JSON object, or on a conflict in strict mode.
#[pyfunction]
#[pyo3(signature = (json, strict=false))]
fn unflatten(json: &str, strict: bool) -> PyResult<String> {
    flatjson_core::unflatten_json_with(json, &options(strict))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The `flatjson` Python module, implemented in Rust via PyO3.
#[pymodule]
fn flatjson(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(flatten, m)?)?;
    m.add_function(wrap_pyfunction!(unflatten, m)?)?;
    Ok(())
}

//! WASM bindings for flatjson-core.
//!
//! Exposes the JSON text wrappers as `#[wasm_bindgen]` functions callable
//! from JavaScript/TypeScript. Every error surfaces as a thrown string.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p flatjson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/flatjson-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/flatjson_wasm.wasm
//! ```

use flatjson_core::Options;
use wasm_bindgen::prelude::*;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse an options object given as JSON text, e.g. `{"onConflict":"error"}`.
fn parse_options(options: &str) -> std::result::Result<Options, JsValue> {
    serde_json::from_str(options).map_err(|e| to_js(format!("invalid options: {e}")))
}

/// Flatten a nested JSON object into dot-joined keys.
///
/// Throws if the input is not a JSON object.
#[wasm_bindgen]
pub fn flatten(json: &str) -> std::result::Result<String, JsValue> {
    flatjson_core::flatten_json(json).map_err(to_js)
}

/// Rebuild a nested JSON object from dot-joined keys.
///
/// Throws if the input is not a JSON object.
#[wasm_bindgen]
pub fn unflatten(json: &str) -> std::result::Result<String, JsValue> {
    flatjson_core::unflatten_json(json).map_err(to_js)
}

/// Flatten with options given as JSON text.
///
/// Throws on invalid input, invalid options, or (with `"onConflict":"error"`)
/// on a key produced twice.
#[wasm_bindgen(js_name = flattenWith)]
pub fn flatten_with(json: &str, options: &str) -> std::result::Result<String, JsValue> {
    let options = parse_options(options)?;
    flatjson_core::flatten_json_with(json, &options).map_err(to_js)
}

/// Unflatten with options given as JSON text.
///
/// Throws on invalid input, invalid options, or (with `"onConflict":"error"`)
/// on keys that disagree about the structure.
#[wasm_bindgen(js_name = unflattenWith)]
pub fn unflatten_with(json: &str, options: &str) -> std::result::Result<String, JsValue> {
    let options = parse_options(options)?;
    flatjson_core::unflatten_json_with(json, &options).map_err(to_js)
}

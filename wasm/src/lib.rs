//! WebAssembly bindings for the DXF and SLI to JSON conversions.
//!
//! Every function takes DXF or SLI text and returns a JSON string.  A failed conversion returns
//! `{"error": "<message>"}` instead of throwing, with `line` set when the error points at one.

use dxf_reader::{ConvertOptions, DxfError};
use wasm_bindgen::prelude::*;

/// Converts DXF text to JSON with the default options.
#[wasm_bindgen]
pub fn dxf_to_json(text: &str) -> String {
    dxf_to_json_impl(text, &ConvertOptions::default())
}

/// Converts DXF text to JSON.  `options_json` is a JSON object such as
/// `{"duplicate_scalars": "first_wins", "pretty": true}`; missing keys take their defaults.
#[wasm_bindgen]
pub fn dxf_to_json_with_options(text: &str, options_json: &str) -> String {
    let options: ConvertOptions = match serde_json::from_str(options_json) {
        Ok(options) => options,
        Err(e) => return error_json(&format!("invalid options: {}", e), None),
    };
    dxf_to_json_impl(text, &options)
}

/// Converts SLI mesh markup to JSON with the default options.
#[wasm_bindgen]
pub fn sli_to_json(text: &str) -> String {
    match dxf_reader::convert_sli(text) {
        Ok(json) => json,
        Err(e) => dxf_error_json(&e),
    }
}

fn dxf_to_json_impl(text: &str, options: &ConvertOptions) -> String {
    match dxf_reader::convert_with_options(text, options) {
        Ok(json) => json,
        Err(e) => dxf_error_json(&e),
    }
}

fn dxf_error_json(err: &DxfError) -> String {
    error_json(&err.to_string(), err.line())
}

fn error_json(msg: &str, line: Option<usize>) -> String {
    match line {
        Some(line) => serde_json::json!({ "error": msg, "line": line }).to_string(),
        None => serde_json::json!({ "error": msg }).to_string(),
    }
}

//! JSON output.
//!
//! Field order comes from the declaration order of the model types, never from the order pairs
//! appeared in the source, and floats are rounded to `FLOAT_PRECISION` significant digits.

use serde::Serializer;

use crate::{ConvertOptions, Drawing, DxfResult};

/// Number of significant digits kept when writing floating point values.
pub const FLOAT_PRECISION: usize = 9;

/// Rounds `val` to `FLOAT_PRECISION` significant digits.  The result prints in its shortest form,
/// so `0.1 + 0.2` is written as `0.3` on every platform while `1.5e-10` keeps its value.
pub fn round_f64(val: f64) -> f64 {
    if !val.is_finite() {
        return val;
    }

    let rounded = format!("{:.*e}", FLOAT_PRECISION - 1, val)
        .parse::<f64>()
        .unwrap_or(val);
    if rounded == 0.0 {
        // never write -0.0
        0.0
    } else {
        rounded
    }
}

pub(crate) fn serialize_f64<S>(val: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_f64(*val))
}

pub(crate) fn serialize_f64_seq<S>(vals: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(vals.iter().map(|v| round_f64(*v)))
}

impl Drawing {
    /// Writes the drawing as JSON text.
    pub fn to_json_string(&self, pretty: bool) -> DxfResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Converts DXF text to JSON with the default options.
pub fn convert(text: &str) -> DxfResult<String> {
    convert_with_options(text, &ConvertOptions::default())
}

/// Converts DXF text to JSON.
pub fn convert_with_options(text: &str, options: &ConvertOptions) -> DxfResult<String> {
    let drawing = Drawing::parse_with_options(text, &options.parse)?;
    drawing.to_json_string(options.pretty)
}

/// Converts SLI mesh markup to JSON with the default options.
pub fn convert_sli(text: &str) -> DxfResult<String> {
    convert_sli_with_options(text, &ConvertOptions::default())
}

/// Converts SLI mesh markup to JSON, in the same shape as a converted DXF drawing.
pub fn convert_sli_with_options(text: &str, options: &ConvertOptions) -> DxfResult<String> {
    let drawing = Drawing::parse_sli_with_options(text, &options.parse)?;
    drawing.to_json_string(options.pretty)
}

use serde::{Deserialize, Serialize};

/// How a repeated group code is resolved for a field that holds a single value.
///
/// Fields that repeat by nature (polyline vertices, spline knots, subclass markers) always keep
/// every occurrence.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    LastWins,
    FirstWins,
}

/// Settings that affect how text is turned into a `Drawing`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ParseOptions {
    pub duplicate_scalars: DuplicatePolicy,
    /// Report a warning for every unrecognized entity kind kept as a raw record.
    pub report_unsupported_entities: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            duplicate_scalars: DuplicatePolicy::LastWins,
            report_unsupported_entities: true,
        }
    }
}

/// Settings for a full text-to-JSON conversion.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ConvertOptions {
    #[serde(flatten)]
    pub parse: ParseOptions,
    pub pretty: bool,
}

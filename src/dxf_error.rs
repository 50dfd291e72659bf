use std::io;

use thiserror::Error;

/// Fatal errors.  Every positional variant names the 1-based line of the offending text.
#[derive(Debug, Error)]
pub enum DxfError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("the group code '{text}' at line {line} is not an integer in the range [0, 1071]")]
    MalformedGroupCode { text: String, line: usize },
    #[error("the input ended after group code {code} at line {line} without a value")]
    TruncatedInput { code: i32, line: usize },
    #[error("the value '{raw}' for group code {code} at line {line} is not a valid number")]
    InvalidNumericValue { code: i32, raw: String, line: usize },
    #[error("the value '{raw}' for group code {code} at line {line} is not a valid boolean")]
    InvalidBooleanValue { code: i32, raw: String, line: usize },
    #[error("the section '{name}' started at line {line} has no matching 0/ENDSEC")]
    UnterminatedSection { name: String, line: usize },
    #[error("the block '{name}' started at line {line} has no matching 0/ENDBLK")]
    UnterminatedBlock { name: String, line: usize },
    #[error("a 2/<section-name> code pair was expected at line {line}")]
    MissingSectionName { line: usize },
    #[error("the value for group code {code} at line {line} does not contain the requested type")]
    WrongValueType { code: i32, line: usize },
    #[error("malformed SLI markup at line {line}: {message}")]
    MalformedSli { message: String, line: usize },
    #[error("the attribute '{attribute}' of the SLI element '{element}' at line {line} has the invalid value '{value}'")]
    InvalidSliAttribute {
        element: String,
        attribute: String,
        value: String,
        line: usize,
    },
}

impl DxfError {
    /// The line the error points at, if it is positional.
    pub fn line(&self) -> Option<usize> {
        match *self {
            DxfError::MalformedGroupCode { line, .. }
            | DxfError::TruncatedInput { line, .. }
            | DxfError::InvalidNumericValue { line, .. }
            | DxfError::InvalidBooleanValue { line, .. }
            | DxfError::UnterminatedSection { line, .. }
            | DxfError::UnterminatedBlock { line, .. }
            | DxfError::MissingSectionName { line }
            | DxfError::WrongValueType { line, .. }
            | DxfError::MalformedSli { line, .. }
            | DxfError::InvalidSliAttribute { line, .. } => Some(line),
            DxfError::Io(_) | DxfError::Json(_) => None,
        }
    }
}

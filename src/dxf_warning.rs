use std::fmt;

use serde::Serialize;

/// A problem that does not stop conversion.  Warnings are collected on the drawing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "warning")]
pub enum DxfWarning {
    /// An INSERT names a block that no BLOCKS section defines.
    UnresolvedBlockReference {
        block_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        handle: Option<String>,
        line: usize,
    },
    /// An entity kind that is kept only as raw pairs.
    UnsupportedConstruct { kind: String, line: usize },
}

impl fmt::Display for DxfWarning {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DxfWarning::UnresolvedBlockReference {
                block_name, line, ..
            } => write!(
                formatter,
                "insert on line {} references undefined block '{}'",
                line, block_name
            ),
            DxfWarning::UnsupportedConstruct { kind, line } => write!(
                formatter,
                "unsupported construct '{}' on line {} kept as raw pairs",
                kind, line
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DxfWarning;

    #[test]
    fn serializes_with_tag() {
        let warning = DxfWarning::UnresolvedBlockReference {
            block_name: String::from("MISSING"),
            handle: None,
            line: 12,
        };
        assert_eq!(
            r#"{"warning":"UnresolvedBlockReference","block_name":"MISSING","line":12}"#,
            serde_json::to_string(&warning).unwrap()
        );
        assert_eq!(
            "insert on line 12 references undefined block 'MISSING'",
            warning.to_string()
        );
    }
}

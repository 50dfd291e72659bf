use std::fmt;
use std::fmt::{Debug, Formatter};

use serde::{Serialize, Serializer};

use crate::code_pair::RawCodePair;
use crate::json::round_f64;
use crate::{DxfError, DxfResult, ExpectedType};

/// A group code's value, typed by the group-code classification table.
#[derive(Clone, PartialEq)]
pub enum CodePairValue {
    Boolean(bool),
    Short(i16),
    Integer(i32),
    Long(i64),
    Double(f64),
    Str(String),
    /// A hexadecimal object handle; never interpreted numerically.
    Handle(String),
}

impl CodePairValue {
    /// Converts the raw text of a code pair into its typed value.
    ///
    /// Numeric and boolean values are trimmed before parsing; string values are kept verbatim.
    /// Failures report the line of the value text, one line past the group code.
    pub fn coerce(pair: &RawCodePair) -> DxfResult<CodePairValue> {
        let value_line = pair.line + 1;
        let trimmed = pair.raw_value.trim();
        let invalid_number = || DxfError::InvalidNumericValue {
            code: pair.code,
            raw: pair.raw_value.clone(),
            line: value_line,
        };
        let value = match ExpectedType::expected_type(pair.code) {
            ExpectedType::Boolean => match trimmed {
                "0" => CodePairValue::Boolean(false),
                "1" => CodePairValue::Boolean(true),
                _ => {
                    return Err(DxfError::InvalidBooleanValue {
                        code: pair.code,
                        raw: pair.raw_value.clone(),
                        line: value_line,
                    })
                }
            },
            ExpectedType::Short => {
                CodePairValue::Short(trimmed.parse().map_err(|_| invalid_number())?)
            }
            ExpectedType::Integer => {
                CodePairValue::Integer(trimmed.parse().map_err(|_| invalid_number())?)
            }
            ExpectedType::Long => {
                CodePairValue::Long(trimmed.parse().map_err(|_| invalid_number())?)
            }
            ExpectedType::Double => {
                let f: f64 = trimmed.parse().map_err(|_| invalid_number())?;
                if !f.is_finite() {
                    return Err(invalid_number());
                }
                CodePairValue::Double(f)
            }
            ExpectedType::Str => CodePairValue::Str(pair.raw_value.clone()),
            ExpectedType::Handle => CodePairValue::Handle(String::from(trimmed)),
        };
        Ok(value)
    }
}

impl Debug for CodePairValue {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            CodePairValue::Boolean(b) => write!(formatter, "{}", if *b { 1 } else { 0 }),
            CodePairValue::Short(s) => write!(formatter, "{: >6}", s),
            CodePairValue::Integer(i) => write!(formatter, "{: >9}", i),
            CodePairValue::Long(l) => write!(formatter, "{}", l),
            CodePairValue::Double(d) => write!(formatter, "{}", round_f64(*d)),
            CodePairValue::Str(s) => write!(formatter, "{}", s),
            CodePairValue::Handle(h) => write!(formatter, "{}", h),
        }
    }
}

impl Serialize for CodePairValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CodePairValue::Boolean(b) => serializer.serialize_bool(*b),
            CodePairValue::Short(s) => serializer.serialize_i16(*s),
            CodePairValue::Integer(i) => serializer.serialize_i32(*i),
            CodePairValue::Long(l) => serializer.serialize_i64(*l),
            CodePairValue::Double(d) => serializer.serialize_f64(round_f64(*d)),
            CodePairValue::Str(s) | CodePairValue::Handle(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::code_pair::RawCodePair;
    use crate::{CodePairValue, DxfError};

    fn coerce(code: i32, raw: &str) -> Result<CodePairValue, DxfError> {
        CodePairValue::coerce(&RawCodePair::new(code, raw, 7))
    }

    #[test]
    fn strings_are_kept_verbatim() {
        assert_eq!(
            CodePairValue::Str(String::from("  padded text ")),
            coerce(1, "  padded text ").unwrap()
        );
    }

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(CodePairValue::Double(1.5), coerce(10, " 1.5 ").unwrap());
        assert_eq!(CodePairValue::Short(256), coerce(62, "   256").unwrap());
        assert_eq!(CodePairValue::Integer(-3), coerce(90, "-3").unwrap());
        assert_eq!(CodePairValue::Long(1 << 40), coerce(160, "1099511627776").unwrap());
    }

    #[test]
    fn handles_are_opaque() {
        assert_eq!(
            CodePairValue::Handle(String::from("1F")),
            coerce(5, "1F").unwrap()
        );
        assert_eq!(
            CodePairValue::Handle(String::from("0")),
            coerce(330, "0").unwrap()
        );
    }

    #[test]
    fn malformed_number_reports_the_value_line() {
        match coerce(20, "one") {
            Err(DxfError::InvalidNumericValue { code, raw, line }) => {
                assert_eq!(20, code);
                assert_eq!("one", raw);
                assert_eq!(8, line);
            }
            other => panic!("expected InvalidNumericValue, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_doubles_are_rejected() {
        assert!(matches!(
            coerce(40, "NaN"),
            Err(DxfError::InvalidNumericValue { .. })
        ));
        assert!(matches!(
            coerce(40, "inf"),
            Err(DxfError::InvalidNumericValue { .. })
        ));
    }

    #[test]
    fn short_overflow_is_rejected() {
        assert!(matches!(
            coerce(70, "70000"),
            Err(DxfError::InvalidNumericValue { .. })
        ));
    }

    #[test]
    fn booleans_accept_only_zero_and_one() {
        assert_eq!(CodePairValue::Boolean(true), coerce(290, "1").unwrap());
        assert_eq!(CodePairValue::Boolean(false), coerce(291, "  0").unwrap());
        assert!(matches!(
            coerce(290, "2"),
            Err(DxfError::InvalidBooleanValue { code: 290, line: 8, .. })
        ));
    }
}

use std::fmt;
use std::fmt::{Debug, Formatter};

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::{CodePairValue, DxfError, DxfResult};

/// The lexical unit of a DXF file: a group code and the verbatim text of its value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawCodePair {
    pub code: i32,
    pub raw_value: String,
    /// The 1-based line holding the group code; the value is on the following line.
    pub line: usize,
}

impl RawCodePair {
    pub fn new(code: i32, raw_value: &str, line: usize) -> Self {
        RawCodePair {
            code,
            raw_value: String::from(raw_value),
            line,
        }
    }
}

/// The basic primitive of a DXF file; a code indicating the type of the data contained, and the
/// data itself.
#[derive(Clone)]
pub struct CodePair {
    pub code: i32,
    pub value: CodePairValue,
    pub line: usize,
}

impl CodePair {
    pub fn new(code: i32, val: CodePairValue, line: usize) -> Self {
        CodePair {
            code,
            value: val,
            line,
        }
    }
    /// Types the raw value of a token.
    pub fn from_raw(raw: RawCodePair) -> DxfResult<Self> {
        let value = CodePairValue::coerce(&raw)?;
        Ok(CodePair::new(raw.code, value, raw.line))
    }
    pub fn new_str(code: i32, val: &str) -> Self {
        CodePair::new(code, CodePairValue::Str(val.to_string()), 0)
    }
    pub fn new_handle(code: i32, val: &str) -> Self {
        CodePair::new(code, CodePairValue::Handle(val.to_string()), 0)
    }
    pub fn new_i16(code: i32, val: i16) -> Self {
        CodePair::new(code, CodePairValue::Short(val), 0)
    }
    pub fn new_i32(code: i32, val: i32) -> Self {
        CodePair::new(code, CodePairValue::Integer(val), 0)
    }
    pub fn new_f64(code: i32, val: f64) -> Self {
        CodePair::new(code, CodePairValue::Double(val), 0)
    }
    pub fn new_bool(code: i32, val: bool) -> Self {
        CodePair::new(code, CodePairValue::Boolean(val), 0)
    }
    pub fn assert_bool(&self) -> DxfResult<bool> {
        match self.value {
            CodePairValue::Boolean(b) => Ok(b),
            _ => Err(self.wrong_value_type()),
        }
    }
    pub fn assert_i64(&self) -> DxfResult<i64> {
        match self.value {
            CodePairValue::Long(l) => Ok(l),
            _ => Err(self.wrong_value_type()),
        }
    }
    pub fn assert_i32(&self) -> DxfResult<i32> {
        match self.value {
            CodePairValue::Integer(i) => Ok(i),
            _ => Err(self.wrong_value_type()),
        }
    }
    pub fn assert_f64(&self) -> DxfResult<f64> {
        match self.value {
            CodePairValue::Double(f) => Ok(f),
            _ => Err(self.wrong_value_type()),
        }
    }
    pub fn assert_string(&self) -> DxfResult<String> {
        match self.value {
            CodePairValue::Str(ref s) => Ok(s.clone()),
            _ => Err(self.wrong_value_type()),
        }
    }
    pub fn assert_handle(&self) -> DxfResult<String> {
        match self.value {
            CodePairValue::Handle(ref h) => Ok(h.clone()),
            _ => Err(self.wrong_value_type()),
        }
    }
    pub fn assert_i16(&self) -> DxfResult<i16> {
        match self.value {
            CodePairValue::Short(s) => Ok(s),
            _ => Err(self.wrong_value_type()),
        }
    }
    /// Returns `true` if this is a 0-code pair whose trimmed value is `keyword`.
    pub fn is_marker(&self, keyword: &str) -> bool {
        match self {
            CodePair {
                code: 0,
                value: CodePairValue::Str(s),
                ..
            } => s.trim() == keyword,
            _ => false,
        }
    }
    /// The trimmed string value, for structural comparisons of names and keywords.
    pub(crate) fn keyword(&self) -> Option<&str> {
        match self.value {
            CodePairValue::Str(ref s) => Some(s.trim()),
            _ => None,
        }
    }
    fn wrong_value_type(&self) -> DxfError {
        DxfError::WrongValueType {
            code: self.code,
            line: self.line,
        }
    }
}

impl Debug for CodePair {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}/{:?}", self.code, &self.value)
    }
}

impl PartialEq for CodePair {
    fn eq(&self, other: &CodePair) -> bool {
        // not comparing lines
        self.code == other.code && self.value == other.value
    }
}

/// Serialized as a `[code, value]` tuple.
impl Serialize for CodePair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.code)?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

use serde::Serialize;

use crate::code_pair_put_back::CodePairPutBack;
use crate::{CodePair, CodePairValue, DxfResult};

/// An unmodeled construct, kept as every code pair it was read from.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RawRecord {
    pub pairs: Vec<CodePair>,
}

impl RawRecord {
    pub fn new(pairs: Vec<CodePair>) -> Self {
        RawRecord { pairs }
    }
    /// The trimmed value of the leading 0-code pair, e.g. `LEADER`.
    pub fn kind(&self) -> Option<&str> {
        match self.pairs.first() {
            Some(pair) if pair.code == 0 => pair.keyword(),
            _ => None,
        }
    }
    /// The line the record started on.
    pub fn line(&self) -> usize {
        self.pairs.first().map_or(0, |p| p.line)
    }
    /// The handle (code 5, or 105 for dimension styles) if present.
    pub fn handle(&self) -> Option<&str> {
        self.pairs.iter().find_map(|p| match (p.code, &p.value) {
            (5, CodePairValue::Handle(h)) | (105, CodePairValue::Handle(h)) => Some(h.as_str()),
            _ => None,
        })
    }
    /// The first string value with the given code.
    pub fn string_value(&self, code: i32) -> Option<&str> {
        self.pairs.iter().find_map(|p| match &p.value {
            CodePairValue::Str(s) if p.code == code => Some(s.as_str()),
            _ => None,
        })
    }
    /// Reads `first` and every following pair up to, but not including, the next 0-code pair.
    pub(crate) fn read<I>(first: CodePair, iter: &mut CodePairPutBack<I>) -> DxfResult<RawRecord>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let mut pairs = vec![first];
        while let Some(pair) = iter.next_unless_code_0() {
            pairs.push(pair?);
        }

        Ok(RawRecord { pairs })
    }
}

use serde::Serialize;
use tracing::debug;

use crate::code_pair_put_back::CodePairPutBack;
use crate::section::is_section_end;
use crate::{CodePair, CodePairValue, DrawingItem, DxfResult, RawRecord};

/// A `9/$NAME` header variable and the pairs that make up its value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderVariable {
    pub name: String,
    pub values: Vec<CodePair>,
    #[serde(skip)]
    pub line: usize,
}

impl HeaderVariable {
    /// The first value of the variable, which is the whole value for non-point variables.
    pub fn value(&self) -> Option<&CodePairValue> {
        self.values.first().map(|p| &p.value)
    }
    pub fn string_value(&self) -> Option<&str> {
        match self.value() {
            Some(CodePairValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Reads the HEADER section body up to its `0/ENDSEC`, which is left in `iter`.  Pairs that
/// appear before the first variable are kept as raw records.
pub(crate) fn read_header_items<I>(iter: &mut CodePairPutBack<I>) -> DxfResult<Vec<DrawingItem>>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    let mut items = vec![];
    loop {
        let pair = match iter.next() {
            Some(Ok(pair)) => pair,
            Some(Err(e)) => return Err(e),
            None => break,
        };
        if is_section_end(&pair) {
            iter.put_back(Ok(pair));
            break;
        }

        let is_variable = pair.code == 9;
        let line = pair.line;
        let mut pairs = vec![pair];
        loop {
            match iter.next() {
                Some(Ok(next)) if next.code == 0 || next.code == 9 => {
                    iter.put_back(Ok(next));
                    break;
                }
                Some(Ok(next)) => pairs.push(next),
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        if is_variable {
            let name = pairs.remove(0).assert_string()?.trim().to_string();
            items.push(DrawingItem::HeaderVariable(HeaderVariable {
                name,
                values: pairs,
                line,
            }));
        } else {
            debug!(line, "keeping header pairs outside of any variable");
            items.push(DrawingItem::Raw(RawRecord::new(pairs)));
        }
    }

    Ok(items)
}

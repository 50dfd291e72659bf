use std::str::Lines;

use crate::code_pair::RawCodePair;
use crate::{CodePair, DxfError, DxfResult};

const MAX_GROUP_CODE: i32 = 1071;

/// Returns raw code pairs as read from text, two physical lines at a time.
///
/// The iterator is single-pass; callers that need to look ahead buffer pairs themselves.
pub(crate) struct TextCodePairIter<'a> {
    lines: Lines<'a>,
    line: usize,
    done: bool,
}

impl<'a> TextCodePairIter<'a> {
    pub fn new(text: &'a str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        TextCodePairIter {
            lines: text.lines(),
            line: 0,
            done: false,
        }
    }
    fn read_code_pair(&mut self) -> Option<DxfResult<RawCodePair>> {
        // Read code.  If no line is available, fail gracefully.
        let code_line = self.lines.next()?;
        self.line += 1;
        let code_line_number = self.line;
        let code_text = code_line.trim();
        if code_text.is_empty() {
            // trailing blank lines are tolerated, anything after them is not
            if self.lines.by_ref().all(|l| l.trim().is_empty()) {
                return None;
            }
            return Some(Err(DxfError::MalformedGroupCode {
                text: String::from(code_line),
                line: code_line_number,
            }));
        }

        let code = match code_text.parse::<i32>() {
            Ok(c) if (0..=MAX_GROUP_CODE).contains(&c) => c,
            _ => {
                return Some(Err(DxfError::MalformedGroupCode {
                    text: String::from(code_line),
                    line: code_line_number,
                }))
            }
        };

        // Read value.  If no line is available die horribly.
        let value_line = match self.lines.next() {
            Some(v) => v,
            None => {
                return Some(Err(DxfError::TruncatedInput {
                    code,
                    line: code_line_number,
                }))
            }
        };
        self.line += 1;

        Some(Ok(RawCodePair::new(code, value_line, code_line_number)))
    }
}

impl<'a> Iterator for TextCodePairIter<'a> {
    type Item = DxfResult<RawCodePair>;
    fn next(&mut self) -> Option<DxfResult<RawCodePair>> {
        if self.done {
            return None;
        }

        let pair = self.read_code_pair();
        if !matches!(pair, Some(Ok(_))) {
            // stop after the first error or the end of input
            self.done = true;
        }

        pair
    }
}

/// Types every pair produced by the tokenizer.
pub(crate) fn coerced_code_pairs(text: &str) -> impl Iterator<Item = DxfResult<CodePair>> + '_ {
    TextCodePairIter::new(text).map(|raw| raw.and_then(CodePair::from_raw))
}

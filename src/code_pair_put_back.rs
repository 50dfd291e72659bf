use tracing::trace;

use crate::{CodePair, DxfResult};

/// A code pair stream that lets readers push back the pair that ended their run.
///
/// `999` comment pairs are dropped here so no reader ever sees them.
pub(crate) struct CodePairPutBack<I>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    top: Vec<DxfResult<CodePair>>,
    iter: I,
}

impl<I> CodePairPutBack<I>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    pub fn from_code_pair_iter(iter: I) -> Self {
        CodePairPutBack { top: vec![], iter }
    }
    pub fn put_back(&mut self, item: DxfResult<CodePair>) {
        self.top.push(item);
    }
    /// Returns the next pair if it is not a 0-code pair; otherwise leaves it in place.
    pub fn next_unless_code_0(&mut self) -> Option<DxfResult<CodePair>> {
        match self.next() {
            Some(Ok(pair @ CodePair { code: 0, .. })) => {
                self.put_back(Ok(pair));
                None
            }
            other => other,
        }
    }
}

impl<I> Iterator for CodePairPutBack<I>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    type Item = DxfResult<CodePair>;

    fn next(&mut self) -> Option<DxfResult<CodePair>> {
        if let Some(pair) = self.top.pop() {
            return Some(pair);
        }

        loop {
            let pair = self.iter.next();
            match pair {
                Some(Ok(CodePair {
                    code: 999, line, ..
                })) => trace!(line, "skipping comment"), // a 999 comment code, try again
                _ => return pair,
            }
        }
    }
}

use serde::Serialize;
use tracing::warn;

use crate::code_pair_put_back::CodePairPutBack;
use crate::{CodePair, DxfResult};

pub(crate) const EXTENSION_DATA_GROUP: i32 = 102;

/// Represents an application name and a collection of extension group data in the form of `CodePair`s.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExtensionGroup {
    pub application_name: String,
    pub items: Vec<ExtensionGroupItem>,
}

/// Represents a single piece of extension data or a named group.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtensionGroupItem {
    CodePair(CodePair),
    Group(ExtensionGroup),
}

impl ExtensionGroup {
    /// Reads the body of a group whose opening `102/{NAME` pair has already been consumed.
    ///
    /// A group still open at the next 0-code pair is closed there.
    pub(crate) fn read_group<I>(
        application_name: &str,
        iter: &mut CodePairPutBack<I>,
        line: usize,
    ) -> DxfResult<ExtensionGroup>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let application_name = application_name
            .trim()
            .trim_start_matches('{')
            .to_string();
        let mut items = vec![];
        loop {
            let pair = match iter.next_unless_code_0() {
                Some(Ok(pair)) => pair,
                Some(Err(e)) => return Err(e),
                None => {
                    warn!(line, group = %application_name, "extension group is not closed");
                    break;
                }
            };
            if pair.code == EXTENSION_DATA_GROUP {
                let name = pair.assert_string()?;
                let trimmed = name.trim();
                if trimmed == "}" {
                    // end of group
                    break;
                } else if trimmed.starts_with('{') {
                    // nested group
                    let sub_group = ExtensionGroup::read_group(&name, iter, pair.line)?;
                    items.push(ExtensionGroupItem::Group(sub_group));
                } else {
                    items.push(ExtensionGroupItem::CodePair(pair));
                }
            } else {
                items.push(ExtensionGroupItem::CodePair(pair));
            }
        }

        Ok(ExtensionGroup {
            application_name,
            items,
        })
    }
}

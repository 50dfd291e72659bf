use serde::Serialize;
use tracing::warn;

use crate::code_pair_put_back::CodePairPutBack;
use crate::section::is_section_end;
use crate::{CodePair, DrawingItem, DxfResult, RawRecord};

/// A symbol table such as `LAYER` or `LTYPE`.  Its entries are kept as raw records.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// The pairs of the table header other than its name.
    pub pairs: Vec<CodePair>,
    pub entries: Vec<RawRecord>,
    #[serde(skip)]
    pub line: usize,
}

impl Table {
    /// Finds an entry by its name (code 2).
    pub fn entry(&self, name: &str) -> Option<&RawRecord> {
        self.entries
            .iter()
            .find(|e| e.string_value(2).map(str::trim) == Some(name))
    }
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| e.string_value(2))
    }
    /// Reads a table whose `0/TABLE` pair has already been consumed, through its `0/ENDTAB`.
    fn read<I>(line: usize, iter: &mut CodePairPutBack<I>) -> DxfResult<Table>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let mut table = Table {
            line,
            ..Default::default()
        };
        let mut has_name = false;
        while let Some(pair) = iter.next_unless_code_0() {
            let pair = pair?;
            match pair.code {
                2 if !has_name => {
                    table.name = pair.assert_string()?;
                    has_name = true;
                }
                5 => {
                    table.handle = Some(pair.assert_handle()?);
                    table.pairs.push(pair);
                }
                _ => table.pairs.push(pair),
            }
        }

        loop {
            let pair = match iter.next() {
                Some(Ok(pair)) => pair,
                Some(Err(e)) => return Err(e),
                None => break,
            };
            if pair.is_marker("ENDTAB") {
                // swallow anything trailing the end marker
                while let Some(trailing) = iter.next_unless_code_0() {
                    trailing?;
                }
                break;
            }
            if is_section_end(&pair) {
                warn!(line, table = %table.name, "table is not closed by ENDTAB");
                iter.put_back(Ok(pair));
                break;
            }
            table.entries.push(RawRecord::read(pair, iter)?);
        }

        Ok(table)
    }
}

/// Reads the TABLES section body up to its `0/ENDSEC`, which is left in `iter`.
pub(crate) fn read_table_items<I>(iter: &mut CodePairPutBack<I>) -> DxfResult<Vec<DrawingItem>>
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
        if pair.is_marker("TABLE") {
            items.push(DrawingItem::Table(Table::read(pair.line, iter)?));
        } else {
            items.push(DrawingItem::Raw(RawRecord::read(pair, iter)?));
        }
    }

    Ok(items)
}

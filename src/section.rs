use serde::Serialize;
use tracing::{debug, warn};

use crate::code_pair_put_back::CodePairPutBack;
use crate::entity_iter::read_entity_items;
use crate::header::read_header_items;
use crate::table::read_table_items;
use crate::{CodePair, DrawingItem, DxfError, DxfResult, Entity, ParseOptions, RawRecord};

/// The name given to the section that collects pairs found outside of any `SECTION`.
pub const PREAMBLE_SECTION_NAME: &str = "PREAMBLE";

/// A named section of the drawing and its items, in file order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub items: Vec<DrawingItem>,
    /// The line of the section's `0/SECTION` pair.
    #[serde(skip)]
    pub line: usize,
}

impl Section {
    pub fn new(name: &str, line: usize) -> Self {
        Section {
            name: String::from(name),
            items: vec![],
            line,
        }
    }
    /// Returns `true` if the section's name matches, ignoring surrounding whitespace.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim() == name
    }
    /// The top-level entities of the section.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.items.iter().filter_map(DrawingItem::as_entity)
    }
}

/// Returns `true` for the pairs that close a section's body.  `0/EOF` counts so that a missing
/// `0/ENDSEC` is reported against the open section.
pub(crate) fn is_section_end(pair: &CodePair) -> bool {
    pair.is_marker("ENDSEC") || pair.is_marker("EOF")
}

/// Reads every section up to `0/EOF` or the end of input.
pub(crate) fn read_sections<I>(
    iter: &mut CodePairPutBack<I>,
    options: &ParseOptions,
) -> DxfResult<Vec<Section>>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    let mut sections = vec![];
    let mut preamble: Option<Section> = None;
    loop {
        let pair = match iter.next() {
            Some(Ok(pair)) => pair,
            Some(Err(e)) => return Err(e),
            None => break,
        };
        if pair.is_marker("EOF") {
            // anything after EOF is ignored
            debug!(line = pair.line, "reached EOF");
            break;
        }
        if pair.is_marker("SECTION") {
            if let Some(preamble) = preamble.take() {
                sections.push(preamble);
            }
            sections.push(read_section(pair.line, iter, options)?);
            continue;
        }

        debug!(line = pair.line, "collecting pairs outside of any section");
        let record = RawRecord::read(pair, iter)?;
        preamble
            .get_or_insert_with(|| Section::new(PREAMBLE_SECTION_NAME, record.line()))
            .items
            .push(DrawingItem::Raw(record));
    }

    if let Some(preamble) = preamble.take() {
        sections.push(preamble);
    }

    Ok(sections)
}

fn read_section<I>(
    line: usize,
    iter: &mut CodePairPutBack<I>,
    options: &ParseOptions,
) -> DxfResult<Section>
where
    I: Iterator<Item = DxfResult<CodePair>>,
{
    let name = match iter.next() {
        Some(Ok(pair)) if pair.code == 2 => pair.assert_string()?,
        Some(Ok(pair)) => return Err(DxfError::MissingSectionName { line: pair.line }),
        Some(Err(e)) => return Err(e),
        None => return Err(DxfError::MissingSectionName { line }),
    };
    debug!(section = %name.trim(), line, "reading section");

    let items = match name.trim() {
        "HEADER" => read_header_items(iter)?,
        "TABLES" => read_table_items(iter)?,
        "BLOCKS" | "ENTITIES" => read_entity_items(iter, options)?,
        _ => read_raw_items(iter)?,
    };

    match iter.next() {
        Some(Ok(pair)) if pair.is_marker("ENDSEC") => {
            // swallow anything trailing the end marker
            while let Some(trailing) = iter.next_unless_code_0() {
                trailing?;
            }
            Ok(Section { name, items, line })
        }
        Some(Err(e)) => Err(e),
        _ => {
            warn!(section = %name.trim(), line, "section is not closed by ENDSEC");
            Err(DxfError::UnterminatedSection { name, line })
        }
    }
}

/// Keeps every record of a section that is not modeled.
fn read_raw_items<I>(iter: &mut CodePairPutBack<I>) -> DxfResult<Vec<DrawingItem>>
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
        items.push(DrawingItem::Raw(RawRecord::read(pair, iter)?));
    }

    Ok(items)
}

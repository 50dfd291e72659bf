use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use encoding_rs::Encoding;
use serde::Serialize;
use tracing::{debug, info};

use crate::code_pair_iter::coerced_code_pairs;
use crate::code_pair_put_back::CodePairPutBack;
use crate::entities::*;
use crate::section::read_sections;
use crate::sli::read_sli;
use crate::{
    AcadVersion, DrawingItem, DrawingItemRef, DxfResult, DxfWarning, Entity, HeaderVariable,
    ParseOptions, Section, Table,
};

/// A parsed DXF document: its sections in file order and the warnings collected while
/// assembling it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Drawing {
    pub sections: Vec<Section>,
    pub warnings: Vec<DxfWarning>,
}

impl Drawing {
    /// Parses DXF text with the default options.
    pub fn parse(text: &str) -> DxfResult<Drawing> {
        Drawing::parse_with_options(text, &ParseOptions::default())
    }
    /// Parses DXF text.  The whole text must be available up front; nothing is retained from it
    /// once parsing returns.
    pub fn parse_with_options(text: &str, options: &ParseOptions) -> DxfResult<Drawing> {
        let mut iter = CodePairPutBack::from_code_pair_iter(coerced_code_pairs(text));
        let sections = read_sections(&mut iter, options)?;
        let drawing = Drawing::assemble(sections, options);
        info!(
            sections = drawing.sections.len(),
            warnings = drawing.warnings.len(),
            "parsed drawing"
        );
        Ok(drawing)
    }
    /// Reads an SLI mesh with the default options.
    pub fn parse_sli(text: &str) -> DxfResult<Drawing> {
        Drawing::parse_sli_with_options(text, &ParseOptions::default())
    }
    /// Reads an SLI mesh.  Its line and face elements become LINE and 3DFACE entities in a single
    /// ENTITIES section.
    pub fn parse_sli_with_options(text: &str, options: &ParseOptions) -> DxfResult<Drawing> {
        let (section, warnings) = read_sli(text, options)?;
        info!(
            entities = section.items.len(),
            warnings = warnings.len(),
            "parsed SLI mesh"
        );
        Ok(Drawing {
            sections: vec![section],
            warnings,
        })
    }
    /// Loads a `Drawing` from anything that implements the `Read` trait.
    pub fn load<T>(reader: &mut T) -> DxfResult<Drawing>
    where
        T: Read + ?Sized,
    {
        Drawing::load_with_encoding(reader, encoding_rs::WINDOWS_1252)
    }
    /// Loads a `Drawing` from anything that implements the `Read` trait.  Input that is not valid
    /// UTF-8 is decoded with the specified text encoding.
    pub fn load_with_encoding<T>(reader: &mut T, encoding: &'static Encoding) -> DxfResult<Drawing>
    where
        T: Read + ?Sized,
    {
        Drawing::load_with_options(reader, encoding, &ParseOptions::default())
    }
    /// Loads a `Drawing` from anything that implements the `Read` trait, with the given encoding
    /// fallback and parse options.
    pub fn load_with_options<T>(
        reader: &mut T,
        encoding: &'static Encoding,
        options: &ParseOptions,
    ) -> DxfResult<Drawing>
    where
        T: Read + ?Sized,
    {
        let mut bytes = vec![];
        reader.read_to_end(&mut bytes)?;
        let text = decode_text(&bytes, encoding);
        Drawing::parse_with_options(&text, options)
    }
    /// Loads a `Drawing` from disk, using a `BufReader`.
    pub fn load_file<P>(path: P) -> DxfResult<Drawing>
    where
        P: AsRef<Path>,
    {
        Drawing::load_file_with_options(path, &ParseOptions::default())
    }
    /// Loads a `Drawing` from disk with the given parse options.
    pub fn load_file_with_options<P>(path: P, options: &ParseOptions) -> DxfResult<Drawing>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let mut buf_reader = BufReader::new(file);
        Drawing::load_with_options(&mut buf_reader, encoding_rs::WINDOWS_1252, options)
    }
    /// Builds the document and collects its warnings.
    fn assemble(sections: Vec<Section>, options: &ParseOptions) -> Drawing {
        let mut drawing = Drawing {
            sections,
            warnings: vec![],
        };
        drawing.warnings = drawing.validate(options);
        drawing
    }
    fn validate(&self, options: &ParseOptions) -> Vec<DxfWarning> {
        // references are only checked when the drawing defines its blocks
        let block_names: Option<HashSet<String>> = if self.section("BLOCKS").is_some() {
            Some(
                self.blocks()
                    .filter_map(|b| match b.specific {
                        EntityType::Block(ref block) => Some(block.name.trim().to_uppercase()),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            None
        };

        let mut warnings = vec![];
        for section in self
            .sections
            .iter()
            .filter(|s| s.is_named("ENTITIES") || s.is_named("BLOCKS"))
        {
            validate_items(&section.items, &block_names, options, &mut warnings);
        }
        for warning in &warnings {
            debug!(%warning, "drawing warning");
        }

        warnings
    }
    /// The sections of the drawing, in file order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
    /// The first section with the given name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.is_named(name))
    }
    /// The top-level entities of every ENTITIES section.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.sections
            .iter()
            .filter(|s| s.is_named("ENTITIES"))
            .flat_map(|s| s.entities())
    }
    /// The BLOCK entities of every BLOCKS section.  Their contents are their children.
    pub fn blocks(&self) -> impl Iterator<Item = &Entity> {
        self.sections
            .iter()
            .filter(|s| s.is_named("BLOCKS"))
            .flat_map(|s| s.entities())
            .filter(|e| matches!(e.specific, EntityType::Block(_)))
    }
    /// Finds a block by name.  Block names are not case sensitive.
    pub fn block(&self, name: &str) -> Option<&Entity> {
        self.blocks().find(|e| match e.specific {
            EntityType::Block(ref block) => block.name.trim().eq_ignore_ascii_case(name.trim()),
            _ => false,
        })
    }
    /// Finds a header variable by name, e.g. `$ACADVER`.
    pub fn header_variable(&self, name: &str) -> Option<&HeaderVariable> {
        self.sections
            .iter()
            .filter(|s| s.is_named("HEADER"))
            .flat_map(|s| s.items.iter())
            .find_map(|item| match item {
                DrawingItem::HeaderVariable(ref v) if v.name == name => Some(v),
                _ => None,
            })
    }
    /// The version the drawing was saved as, if `$ACADVER` is present and recognized.
    pub fn version(&self) -> Option<AcadVersion> {
        self.header_variable("$ACADVER")
            .and_then(|v| v.string_value())
            .and_then(AcadVersion::from_version_string)
    }
    /// Finds a symbol table by name, e.g. `LAYER`.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.sections
            .iter()
            .filter(|s| s.is_named("TABLES"))
            .flat_map(|s| s.items.iter())
            .find_map(|item| match item {
                DrawingItem::Table(ref t) if t.name.trim() == name => Some(t),
                _ => None,
            })
    }
    /// Finds anything carrying the given handle, at any depth.
    pub fn item_by_handle(&self, handle: &str) -> Option<DrawingItemRef<'_>> {
        self.sections
            .iter()
            .find_map(|s| find_by_handle(&s.items, handle))
    }
}

/// Decodes file bytes.  Valid UTF-8 is used as is; anything else is decoded with `encoding`.
fn decode_text(bytes: &[u8], encoding: &'static Encoding) -> String {
    match encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text.into_owned(),
        None => {
            debug!(encoding = encoding.name(), "input is not UTF-8");
            let (text, _, _) = encoding.decode(bytes);
            text.into_owned()
        }
    }
}

fn validate_items(
    items: &[DrawingItem],
    block_names: &Option<HashSet<String>>,
    options: &ParseOptions,
    warnings: &mut Vec<DxfWarning>,
) {
    for item in items {
        match item {
            DrawingItem::Entity(ref entity) => {
                if let (EntityType::Insert(ref insert), Some(names)) =
                    (&entity.specific, block_names)
                {
                    if !names.contains(&insert.name.trim().to_uppercase()) {
                        warnings.push(DxfWarning::UnresolvedBlockReference {
                            block_name: insert.name.clone(),
                            handle: entity.common.handle.clone(),
                            line: entity.line,
                        });
                    }
                }
                validate_items(&entity.children, block_names, options, warnings);
            }
            DrawingItem::Raw(ref raw) if options.report_unsupported_entities => {
                warnings.push(DxfWarning::UnsupportedConstruct {
                    kind: raw.kind().unwrap_or_default().to_string(),
                    line: raw.line(),
                });
            }
            _ => (),
        }
    }
}

fn find_by_handle<'a>(items: &'a [DrawingItem], handle: &str) -> Option<DrawingItemRef<'a>> {
    let has_handle = |h: Option<&str>| h.map_or(false, |h| h.eq_ignore_ascii_case(handle));
    for item in items {
        match item {
            DrawingItem::Entity(ref entity) => {
                if has_handle(entity.handle()) {
                    return Some(DrawingItemRef::Entity(entity));
                }
                if let Some(found) = find_by_handle(&entity.children, handle) {
                    return Some(found);
                }
                if let Some(closing) = entity.closing_record() {
                    if has_handle(closing.handle()) {
                        return Some(DrawingItemRef::Raw(closing));
                    }
                }
            }
            DrawingItem::Raw(ref raw) if has_handle(raw.handle()) => {
                return Some(DrawingItemRef::Raw(raw));
            }
            DrawingItem::Table(ref table) => {
                if has_handle(table.handle.as_deref()) {
                    return Some(DrawingItemRef::Table(table));
                }
                if let Some(entry) = table.entries.iter().find(|e| has_handle(e.handle())) {
                    return Some(DrawingItemRef::Raw(entry));
                }
            }
            _ => (),
        }
    }

    None
}

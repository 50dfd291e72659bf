use serde::Serialize;

use crate::{Entity, HeaderVariable, RawRecord, Table};

/// One item of a section.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "item", rename_all = "snake_case")]
pub enum DrawingItem {
    Entity(Entity),
    /// Anything that is not modeled, kept pair for pair.
    Raw(RawRecord),
    HeaderVariable(HeaderVariable),
    Table(Table),
}

impl DrawingItem {
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            DrawingItem::Entity(ref e) => Some(e),
            _ => None,
        }
    }
    pub fn as_raw(&self) -> Option<&RawRecord> {
        match self {
            DrawingItem::Raw(ref r) => Some(r),
            _ => None,
        }
    }
    pub fn handle(&self) -> Option<&str> {
        match self {
            DrawingItem::Entity(ref e) => e.handle(),
            DrawingItem::Raw(ref r) => r.handle(),
            DrawingItem::HeaderVariable(_) => None,
            DrawingItem::Table(ref t) => t.handle.as_deref(),
        }
    }
    /// The line the item started on.
    pub fn line(&self) -> usize {
        match self {
            DrawingItem::Entity(ref e) => e.line,
            DrawingItem::Raw(ref r) => r.line(),
            DrawingItem::HeaderVariable(ref v) => v.line,
            DrawingItem::Table(ref t) => t.line,
        }
    }
}

/// Anything in a drawing that can be found by its handle.
#[derive(Clone, Copy, Debug)]
pub enum DrawingItemRef<'a> {
    Entity(&'a Entity),
    Raw(&'a RawRecord),
    Table(&'a Table),
}

impl<'a> DrawingItemRef<'a> {
    pub fn handle(&self) -> Option<&'a str> {
        match *self {
            DrawingItemRef::Entity(e) => e.handle(),
            DrawingItemRef::Raw(r) => r.handle(),
            DrawingItemRef::Table(t) => t.handle.as_deref(),
        }
    }
}

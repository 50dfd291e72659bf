use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::code_pair_put_back::CodePairPutBack;
use crate::entities::*;
use crate::extension_data::{ExtensionGroup, EXTENSION_DATA_GROUP};
use crate::x_data::{XData, XDATA_APPLICATIONNAME};
use crate::{CodePair, CodePairValue, DrawingItem, DuplicatePolicy, DxfResult, RawRecord};

/// The properties every entity can carry, regardless of its kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EntityCommon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subclass_markers: Vec<String>,
    /// Every code the entity's kind does not declare, by group code.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub common_properties: BTreeMap<i32, CodePairValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extension_data: Vec<ExtensionGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub x_data: Vec<XData>,
}

/// A modeled drawing entity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entity {
    #[serde(flatten)]
    pub specific: EntityType,
    #[serde(flatten)]
    pub common: EntityCommon,
    /// Vertices of a POLYLINE, attributes of an INSERT, or the contents of a BLOCK.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DrawingItem>,
    /// The line of the entity's `0/<KIND>` pair.
    #[serde(skip)]
    pub line: usize,
}

impl Entity {
    /// Creates a new `Entity` with the default common values.
    pub fn new(specific: EntityType) -> Self {
        Entity {
            specific,
            common: Default::default(),
            children: vec![],
            line: 0,
        }
    }
    /// The DXF keyword of the entity, e.g. `LINE`.
    pub fn kind(&self) -> &'static str {
        self.specific.type_string()
    }
    pub fn handle(&self) -> Option<&str> {
        self.common.handle.as_deref()
    }
    /// The entity's layer; entities without one live on layer `0`.
    pub fn layer_name(&self) -> &str {
        self.common.layer.as_deref().unwrap_or("0")
    }
    /// Looks up an undeclared property by group code.
    pub fn common_property(&self, code: i32) -> Option<&CodePairValue> {
        self.common.common_properties.get(&code)
    }
    /// The entities nested under this one.
    pub fn child_entities(&self) -> impl Iterator<Item = &Entity> {
        self.children.iter().filter_map(DrawingItem::as_entity)
    }
    /// The ENDBLK or SEQEND record that closed this entity's children.
    pub fn closing_record(&self) -> Option<&RawRecord> {
        match self.specific {
            EntityType::Block(ref block) => block.end_block.as_ref(),
            EntityType::Insert(ref insert) => insert.seqend.as_ref(),
            EntityType::Polyline(ref poly) => poly.seqend.as_ref(),
            _ => None,
        }
    }
    /// Reads the pairs of an entity whose `0/<KIND>` pair, `first`, has already been consumed.
    pub(crate) fn read<I>(
        specific: EntityType,
        first: &CodePair,
        iter: &mut CodePairPutBack<I>,
        policy: DuplicatePolicy,
    ) -> DxfResult<Entity>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let mut entity = Entity::new(specific);
        entity.line = first.line;
        let mut seen = HashSet::new();
        while let Some(pair) = iter.next_unless_code_0() {
            let pair = pair?;
            entity.apply_code_pair(pair, iter, policy, &mut seen)?;
        }

        Ok(entity)
    }
    fn apply_code_pair<I>(
        &mut self,
        pair: CodePair,
        iter: &mut CodePairPutBack<I>,
        policy: DuplicatePolicy,
        seen: &mut HashSet<i32>,
    ) -> DxfResult<()>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        match pair.code {
            100 => {
                self.common.subclass_markers.push(pair.assert_string()?);
                return Ok(());
            }
            EXTENSION_DATA_GROUP => {
                let name = pair.assert_string()?;
                if name.trim().starts_with('{') {
                    let group = ExtensionGroup::read_group(&name, iter, pair.line)?;
                    self.common.extension_data.push(group);
                    return Ok(());
                }
            }
            XDATA_APPLICATIONNAME => {
                let xdata = XData::read_item(pair.assert_string()?, iter)?;
                self.common.x_data.push(xdata);
                return Ok(());
            }
            _ => (),
        }

        if !self.specific.is_repeating_code(pair.code)
            && !seen.insert(pair.code)
            && policy == DuplicatePolicy::FirstWins
        {
            trace!(code = pair.code, line = pair.line, "ignoring repeated scalar");
            return Ok(());
        }

        match pair.code {
            5 => self.common.handle = Some(pair.assert_handle()?),
            8 => self.common.layer = Some(pair.assert_string()?),
            _ => {
                if !self.specific.apply_code_pair(&pair)? {
                    let (code, line) = (pair.code, pair.line);
                    if let Some(previous) = self.common.common_properties.insert(code, pair.value) {
                        trace!(code, line, ?previous, "replacing repeated property");
                    }
                }
            }
        }

        Ok(())
    }
}

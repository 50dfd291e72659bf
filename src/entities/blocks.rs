use serde::Serialize;

use super::SpecificEntity;
use crate::json::serialize_f64;
use crate::{CodePair, DxfResult, Point, RawRecord};

/// A block definition.  Its contents are the children of the owning entity.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Block {
    pub name: String,
    pub flags: i16,
    pub base_point: Point,
    pub xref_path_name: String,
    pub description: String,
    /// The handle of the ENDBLK record that closed the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_handle: Option<String>,
    /// Every pair of the ENDBLK record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_block: Option<RawRecord>,
}

impl Block {
    pub fn is_anonymous(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn has_attribute_definitions(&self) -> bool {
        self.flags & 2 != 0
    }
    pub fn is_xref(&self) -> bool {
        self.flags & 4 != 0
    }
}

impl SpecificEntity for Block {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            1 => self.xref_path_name = pair.assert_string()?,
            2 | 3 => self.name = pair.assert_string()?,
            4 => self.description = pair.assert_string()?,
            10 | 20 | 30 => {
                self.base_point.set(10, pair)?;
            }
            70 => self.flags = pair.assert_i16()?,
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// A reference to a block, optionally repeated in a grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Insert {
    pub name: String,
    pub location: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub x_scale_factor: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub y_scale_factor: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub z_scale_factor: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub rotation: f64,
    pub column_count: i16,
    pub row_count: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub column_spacing: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub row_spacing: f64,
    /// Set when ATTRIB entities and a closing SEQEND follow.
    pub has_attributes: bool,
    pub extrusion_direction: Point,
    /// The SEQEND record that closed the attribute run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqend: Option<RawRecord>,
}

impl Default for Insert {
    fn default() -> Self {
        Insert {
            name: String::new(),
            location: Point::origin(),
            x_scale_factor: 1.0,
            y_scale_factor: 1.0,
            z_scale_factor: 1.0,
            rotation: 0.0,
            column_count: 1,
            row_count: 1,
            column_spacing: 0.0,
            row_spacing: 0.0,
            has_attributes: false,
            extrusion_direction: Point::z_axis(),
            seqend: None,
        }
    }
}

impl SpecificEntity for Insert {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            2 => self.name = pair.assert_string()?,
            10 | 20 | 30 => {
                self.location.set(10, pair)?;
            }
            41 => self.x_scale_factor = pair.assert_f64()?,
            42 => self.y_scale_factor = pair.assert_f64()?,
            43 => self.z_scale_factor = pair.assert_f64()?,
            44 => self.column_spacing = pair.assert_f64()?,
            45 => self.row_spacing = pair.assert_f64()?,
            50 => self.rotation = pair.assert_f64()?,
            66 => self.has_attributes = pair.assert_i16()? != 0,
            70 => self.column_count = pair.assert_i16()?,
            71 => self.row_count = pair.assert_i16()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

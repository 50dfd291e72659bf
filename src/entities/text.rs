use serde::Serialize;

use super::SpecificEntity;
use crate::json::serialize_f64;
use crate::{CodePair, DxfResult, Point};

/// A single line of text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    pub location: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub text_height: f64,
    pub value: String,
    #[serde(serialize_with = "serialize_f64")]
    pub rotation: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub relative_x_scale_factor: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub oblique_angle: f64,
    pub text_style_name: String,
    pub text_generation_flags: i16,
    pub horizontal_justification: i16,
    pub second_alignment_point: Point,
    pub vertical_justification: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Text {
    fn default() -> Self {
        Text {
            location: Point::origin(),
            text_height: 1.0,
            value: String::new(),
            rotation: 0.0,
            relative_x_scale_factor: 1.0,
            oblique_angle: 0.0,
            text_style_name: String::from("STANDARD"),
            text_generation_flags: 0,
            horizontal_justification: 0,
            second_alignment_point: Point::origin(),
            vertical_justification: 0,
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl SpecificEntity for Text {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            1 => self.value = pair.assert_string()?,
            7 => self.text_style_name = pair.assert_string()?,
            10 | 20 | 30 => {
                self.location.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.second_alignment_point.set(11, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            40 => self.text_height = pair.assert_f64()?,
            41 => self.relative_x_scale_factor = pair.assert_f64()?,
            50 => self.rotation = pair.assert_f64()?,
            51 => self.oblique_angle = pair.assert_f64()?,
            71 => self.text_generation_flags = pair.assert_i16()?,
            72 => self.horizontal_justification = pair.assert_i16()?,
            73 => self.vertical_justification = pair.assert_i16()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// Multi-line text.  Long strings are split into `extended_text` chunks followed by `text`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MText {
    pub insertion_point: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub initial_text_height: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub reference_rectangle_width: f64,
    pub attachment_point: i16,
    pub drawing_direction: i16,
    pub text: String,
    pub extended_text: Vec<String>,
    pub text_style_name: String,
    pub x_axis_direction: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub rotation_angle: f64,
    pub line_spacing_style: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub line_spacing_factor: f64,
    pub extrusion_direction: Point,
}

impl Default for MText {
    fn default() -> Self {
        MText {
            insertion_point: Point::origin(),
            initial_text_height: 1.0,
            reference_rectangle_width: 1.0,
            attachment_point: 1,
            drawing_direction: 1,
            text: String::new(),
            extended_text: vec![],
            text_style_name: String::from("STANDARD"),
            x_axis_direction: Point::new(1.0, 0.0, 0.0),
            rotation_angle: 0.0,
            line_spacing_style: 1,
            line_spacing_factor: 1.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl MText {
    /// The complete text: every extended chunk in order, then the final chunk.
    pub fn full_text(&self) -> String {
        let mut full = self.extended_text.concat();
        full.push_str(&self.text);
        full
    }
}

impl SpecificEntity for MText {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            1 => self.text = pair.assert_string()?,
            3 => self.extended_text.push(pair.assert_string()?),
            7 => self.text_style_name = pair.assert_string()?,
            10 | 20 | 30 => {
                self.insertion_point.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.x_axis_direction.set(11, pair)?;
            }
            40 => self.initial_text_height = pair.assert_f64()?,
            41 => self.reference_rectangle_width = pair.assert_f64()?,
            44 => self.line_spacing_factor = pair.assert_f64()?,
            50 => self.rotation_angle = pair.assert_f64()?,
            71 => self.attachment_point = pair.assert_i16()?,
            72 => self.drawing_direction = pair.assert_i16()?,
            73 => self.line_spacing_style = pair.assert_i16()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
    fn is_repeating_code(&self, code: i32) -> bool {
        code == 3
    }
}

/// An attribute value attached to an INSERT.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attribute {
    pub attribute_tag: String,
    pub value: String,
    pub location: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub text_height: f64,
    pub flags: i16,
    pub field_length: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub rotation: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub relative_x_scale_factor: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub oblique_angle: f64,
    pub text_style_name: String,
    pub text_generation_flags: i16,
    pub horizontal_justification: i16,
    pub vertical_justification: i16,
    pub second_alignment_point: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute {
            attribute_tag: String::new(),
            value: String::new(),
            location: Point::origin(),
            text_height: 1.0,
            flags: 0,
            field_length: 0,
            rotation: 0.0,
            relative_x_scale_factor: 1.0,
            oblique_angle: 0.0,
            text_style_name: String::from("STANDARD"),
            text_generation_flags: 0,
            horizontal_justification: 0,
            vertical_justification: 0,
            second_alignment_point: Point::origin(),
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl Attribute {
    pub fn is_invisible(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn is_constant(&self) -> bool {
        self.flags & 2 != 0
    }
}

impl SpecificEntity for Attribute {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            1 => self.value = pair.assert_string()?,
            2 => self.attribute_tag = pair.assert_string()?,
            7 => self.text_style_name = pair.assert_string()?,
            10 | 20 | 30 => {
                self.location.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.second_alignment_point.set(11, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            40 => self.text_height = pair.assert_f64()?,
            41 => self.relative_x_scale_factor = pair.assert_f64()?,
            50 => self.rotation = pair.assert_f64()?,
            51 => self.oblique_angle = pair.assert_f64()?,
            70 => self.flags = pair.assert_i16()?,
            71 => self.text_generation_flags = pair.assert_i16()?,
            72 => self.horizontal_justification = pair.assert_i16()?,
            73 => self.field_length = pair.assert_i16()?,
            74 => self.vertical_justification = pair.assert_i16()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// The template an INSERT's attributes are created from, written `ATTDEF` in the file.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AttributeDefinition {
    #[serde(flatten)]
    pub attribute: Attribute,
    pub prompt: String,
}

impl SpecificEntity for AttributeDefinition {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            3 => {
                self.prompt = pair.assert_string()?;
                Ok(true)
            }
            _ => self.attribute.apply_code_pair(pair),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mtext_joins_extended_chunks() {
        let mut mtext = MText::default();
        for pair in &[
            CodePair::new_str(3, "first "),
            CodePair::new_str(3, "second "),
            CodePair::new_str(1, "last"),
        ] {
            assert!(mtext.apply_code_pair(pair).unwrap());
        }
        assert_eq!("first second last", mtext.full_text());
        assert!(mtext.is_repeating_code(3));
        assert!(!mtext.is_repeating_code(1));
    }

    #[test]
    fn attdef_reads_prompt_and_attribute_fields() {
        let mut attdef = AttributeDefinition::default();
        for pair in &[
            CodePair::new_str(2, "TAG"),
            CodePair::new_str(3, "Enter a value"),
            CodePair::new_str(1, "default"),
            CodePair::new_i16(70, 2),
        ] {
            assert!(attdef.apply_code_pair(pair).unwrap());
        }
        assert_eq!("TAG", attdef.attribute.attribute_tag);
        assert_eq!("Enter a value", attdef.prompt);
        assert_eq!("default", attdef.attribute.value);
        assert!(attdef.attribute.is_constant());
    }

    #[test]
    fn text_keeps_value_verbatim() {
        let mut text = Text::default();
        text.apply_code_pair(&CodePair::new_str(1, "  padded  ")).unwrap();
        assert_eq!("  padded  ", text.value);
        assert_eq!("STANDARD", text.text_style_name);
    }
}

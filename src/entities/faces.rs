use serde::Serialize;

use super::SpecificEntity;
use crate::json::serialize_f64;
use crate::{CodePair, DxfResult, Point};

/// Applies the four corner points shared by SOLID, TRACE and 3DFACE.
fn apply_corner(corners: &mut [&mut Point; 4], pair: &CodePair) -> DxfResult<bool> {
    let index = match pair.code {
        10 | 20 | 30 => 0,
        11 | 21 | 31 => 1,
        12 | 22 | 32 => 2,
        13 | 23 | 33 => 3,
        _ => return Ok(false),
    };
    corners[index].set(10 + index as i32, pair)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solid {
    pub first_corner: Point,
    pub second_corner: Point,
    pub third_corner: Point,
    pub fourth_corner: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Solid {
    fn default() -> Self {
        Solid {
            first_corner: Point::origin(),
            second_corner: Point::origin(),
            third_corner: Point::origin(),
            fourth_corner: Point::origin(),
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl SpecificEntity for Solid {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            39 => self.thickness = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => {
                let mut corners = [
                    &mut self.first_corner,
                    &mut self.second_corner,
                    &mut self.third_corner,
                    &mut self.fourth_corner,
                ];
                return apply_corner(&mut corners, pair);
            }
        }

        Ok(true)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    pub first_corner: Point,
    pub second_corner: Point,
    pub third_corner: Point,
    pub fourth_corner: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Trace {
    fn default() -> Self {
        Trace {
            first_corner: Point::origin(),
            second_corner: Point::origin(),
            third_corner: Point::origin(),
            fourth_corner: Point::origin(),
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl SpecificEntity for Trace {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            39 => self.thickness = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => {
                let mut corners = [
                    &mut self.first_corner,
                    &mut self.second_corner,
                    &mut self.third_corner,
                    &mut self.fourth_corner,
                ];
                return apply_corner(&mut corners, pair);
            }
        }

        Ok(true)
    }
}

/// A three or four sided face, written `3DFACE` in the file.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Face3D {
    pub first_corner: Point,
    pub second_corner: Point,
    pub third_corner: Point,
    pub fourth_corner: Point,
    /// Bit-coded invisible edges.
    pub edge_flags: i16,
}

impl Face3D {
    pub fn is_first_edge_invisible(&self) -> bool {
        self.edge_flags & 1 != 0
    }
    pub fn is_second_edge_invisible(&self) -> bool {
        self.edge_flags & 2 != 0
    }
    pub fn is_third_edge_invisible(&self) -> bool {
        self.edge_flags & 4 != 0
    }
    pub fn is_fourth_edge_invisible(&self) -> bool {
        self.edge_flags & 8 != 0
    }
}

impl SpecificEntity for Face3D {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            70 => self.edge_flags = pair.assert_i16()?,
            _ => {
                let mut corners = [
                    &mut self.first_corner,
                    &mut self.second_corner,
                    &mut self.third_corner,
                    &mut self.fourth_corner,
                ];
                return apply_corner(&mut corners, pair);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_reads_all_corners() {
        let mut face = Face3D::default();
        for pair in &[
            CodePair::new_f64(10, 1.0),
            CodePair::new_f64(21, 2.0),
            CodePair::new_f64(32, 3.0),
            CodePair::new_f64(13, 4.0),
            CodePair::new_i16(70, 5),
        ] {
            assert!(face.apply_code_pair(pair).unwrap());
        }
        assert_eq!(Point::new(1.0, 0.0, 0.0), face.first_corner);
        assert_eq!(Point::new(0.0, 2.0, 0.0), face.second_corner);
        assert_eq!(Point::new(0.0, 0.0, 3.0), face.third_corner);
        assert_eq!(Point::new(4.0, 0.0, 0.0), face.fourth_corner);
        assert!(face.is_first_edge_invisible());
        assert!(!face.is_second_edge_invisible());
        assert!(face.is_third_edge_invisible());
    }

    #[test]
    fn solid_ignores_undeclared_codes() {
        let mut solid = Solid::default();
        assert!(!solid.apply_code_pair(&CodePair::new_f64(14, 1.0)).unwrap());
        assert!(solid.apply_code_pair(&CodePair::new_f64(39, 2.0)).unwrap());
        assert_eq!(2.0, solid.thickness);
    }
}

use serde::Serialize;

use super::SpecificEntity;
use crate::json::serialize_f64;
use crate::{CodePair, DxfResult, Point};

/// A straight segment between two points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub start_point: Point,
    pub end_point: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Line {
    fn default() -> Self {
        Line {
            start_point: Point::origin(),
            end_point: Point::origin(),
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl Line {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Line {
            start_point,
            end_point,
            ..Default::default()
        }
    }
}

impl SpecificEntity for Line {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.start_point.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.end_point.set(11, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// A single point, written `POINT` in the file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelPoint {
    pub location: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub angle: f64,
    pub extrusion_direction: Point,
}

impl Default for ModelPoint {
    fn default() -> Self {
        ModelPoint {
            location: Point::origin(),
            thickness: 0.0,
            angle: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl SpecificEntity for ModelPoint {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.location.set(10, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            50 => self.angle = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub radius: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Circle {
    fn default() -> Self {
        Circle {
            center: Point::origin(),
            radius: 0.0,
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl SpecificEntity for Circle {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.center.set(10, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            40 => self.radius = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// A circular arc.  Angles are in degrees, counter-clockwise.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Arc {
    pub center: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub radius: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub start_angle: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub end_angle: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub extrusion_direction: Point,
}

impl Default for Arc {
    fn default() -> Self {
        Arc {
            center: Point::origin(),
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
            thickness: 0.0,
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl SpecificEntity for Arc {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.center.set(10, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            40 => self.radius = pair.assert_f64()?,
            50 => self.start_angle = pair.assert_f64()?,
            51 => self.end_angle = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// An ellipse or elliptical arc.  The major axis is relative to the center.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ellipse {
    pub center: Point,
    pub major_axis: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub minor_axis_ratio: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub start_parameter: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub end_parameter: f64,
    pub normal: Point,
}

impl Default for Ellipse {
    fn default() -> Self {
        Ellipse {
            center: Point::origin(),
            major_axis: Point::new(1.0, 0.0, 0.0),
            minor_axis_ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: std::f64::consts::PI * 2.0,
            normal: Point::z_axis(),
        }
    }
}

impl SpecificEntity for Ellipse {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.center.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.major_axis.set(11, pair)?;
            }
            40 => self.minor_axis_ratio = pair.assert_f64()?,
            41 => self.start_parameter = pair.assert_f64()?,
            42 => self.end_parameter = pair.assert_f64()?,
            210 | 220 | 230 => {
                self.normal.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// A semi-infinite line.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Ray {
    pub first_point: Point,
    pub unit_direction: Point,
}

impl SpecificEntity for Ray {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.first_point.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.unit_direction.set(11, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

/// An infinite construction line.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct XLine {
    pub first_point: Point,
    pub unit_direction: Point,
}

impl SpecificEntity for XLine {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.first_point.set(10, pair)?;
            }
            11 | 21 | 31 => {
                self.unit_direction.set(11, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<T: SpecificEntity>(entity: &mut T, pairs: &[CodePair]) -> Vec<bool> {
        pairs
            .iter()
            .map(|p| entity.apply_code_pair(p).unwrap())
            .collect()
    }

    #[test]
    fn line_reads_both_points() {
        let mut line = Line::default();
        let applied = apply(
            &mut line,
            &[
                CodePair::new_f64(10, 1.0),
                CodePair::new_f64(20, 2.0),
                CodePair::new_f64(11, 3.0),
                CodePair::new_f64(31, 4.0),
                CodePair::new_f64(40, 9.0),
            ],
        );
        assert_eq!(vec![true, true, true, true, false], applied);
        assert_eq!(Point::new(1.0, 2.0, 0.0), line.start_point);
        assert_eq!(Point::new(3.0, 0.0, 4.0), line.end_point);
        assert_eq!(Point::z_axis(), line.extrusion_direction);
    }

    #[test]
    fn arc_defaults_to_full_sweep() {
        let arc = Arc::default();
        assert_eq!(0.0, arc.start_angle);
        assert_eq!(360.0, arc.end_angle);
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        let mut circle = Circle::default();
        assert!(circle
            .apply_code_pair(&CodePair::new_str(40, "not a double"))
            .is_err());
    }
}

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::json::round_f64;
use crate::{CodePair, DxfResult};

/// Represents a simple point in Cartesian space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// The X value of the point.
    pub x: f64,
    /// The Y value of the point.
    pub y: f64,
    /// The Z value of the point.
    pub z: f64,
}

impl Point {
    /// Creates a new `Point` with the specified values.
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }
    /// Returns a point representing the origin of (0, 0, 0).
    pub fn origin() -> Point {
        Point::new(0.0, 0.0, 0.0)
    }
    /// The default extrusion direction, (0, 0, 1).
    pub fn z_axis() -> Point {
        Point::new(0.0, 0.0, 1.0)
    }
    /// Applies a coordinate pair with base code `base` (e.g. 10 for 10/20/30).  Returns `false` if
    /// the pair is not one of this point's coordinates.
    pub(crate) fn set(&mut self, base: i32, pair: &CodePair) -> DxfResult<bool> {
        match pair.code - base {
            0 => self.x = pair.assert_f64()?,
            10 => self.y = pair.assert_f64()?,
            20 => self.z = pair.assert_f64()?,
            _ => return Ok(false),
        }

        Ok(true)
    }

    pub fn tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Point", 3)?;
        state.serialize_field("x", &round_f64(self.x))?;
        state.serialize_field("y", &round_f64(self.y))?;
        state.serialize_field("z", &round_f64(self.z))?;
        state.end()
    }
}

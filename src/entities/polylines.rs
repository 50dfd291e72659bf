use serde::Serialize;

use super::SpecificEntity;
use crate::json::{serialize_f64, serialize_f64_seq};
use crate::{CodePair, DxfResult, Point, RawRecord};

/// One vertex of a lightweight polyline.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LwPolylineVertex {
    #[serde(serialize_with = "serialize_f64")]
    pub x: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub y: f64,
    pub id: i32,
    #[serde(serialize_with = "serialize_f64")]
    pub starting_width: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub ending_width: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub bulge: f64,
}

/// A two dimensional polyline that carries its vertices inline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LwPolyline {
    pub flags: i16,
    /// The count written in the file; `vertices` holds what was actually read.
    pub vertex_count: i32,
    #[serde(serialize_with = "serialize_f64")]
    pub constant_width: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub elevation: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub vertices: Vec<LwPolylineVertex>,
    pub extrusion_direction: Point,
}

impl Default for LwPolyline {
    fn default() -> Self {
        LwPolyline {
            flags: 0,
            vertex_count: 0,
            constant_width: 0.0,
            elevation: 0.0,
            thickness: 0.0,
            vertices: vec![],
            extrusion_direction: Point::z_axis(),
        }
    }
}

impl LwPolyline {
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
    fn last_vertex(&mut self) -> &mut LwPolylineVertex {
        if self.vertices.is_empty() {
            self.vertices.push(LwPolylineVertex::default());
        }
        let last = self.vertices.len() - 1;
        &mut self.vertices[last]
    }
}

impl SpecificEntity for LwPolyline {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            // a new vertex starts with its x coordinate
            10 => self.vertices.push(LwPolylineVertex {
                x: pair.assert_f64()?,
                ..Default::default()
            }),
            20 => self.last_vertex().y = pair.assert_f64()?,
            40 => self.last_vertex().starting_width = pair.assert_f64()?,
            41 => self.last_vertex().ending_width = pair.assert_f64()?,
            42 => self.last_vertex().bulge = pair.assert_f64()?,
            91 => self.last_vertex().id = pair.assert_i32()?,
            38 => self.elevation = pair.assert_f64()?,
            39 => self.thickness = pair.assert_f64()?,
            43 => self.constant_width = pair.assert_f64()?,
            70 => self.flags = pair.assert_i16()?,
            90 => self.vertex_count = pair.assert_i32()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
    fn is_repeating_code(&self, code: i32) -> bool {
        matches!(code, 10 | 20 | 40 | 41 | 42 | 91)
    }
}

/// A polyline whose vertices follow it as separate VERTEX entities, closed by SEQEND.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline {
    pub flags: i16,
    pub location: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub default_starting_width: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub default_ending_width: f64,
    pub polygon_mesh_m_vertex_count: i16,
    pub polygon_mesh_n_vertex_count: i16,
    pub smooth_surface_m_density: i16,
    pub smooth_surface_n_density: i16,
    pub surface_type: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub thickness: f64,
    pub has_vertices: bool,
    pub extrusion_direction: Point,
    /// The SEQEND record that closed the vertex run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqend: Option<RawRecord>,
}

impl Default for Polyline {
    fn default() -> Self {
        Polyline {
            flags: 0,
            location: Point::origin(),
            default_starting_width: 0.0,
            default_ending_width: 0.0,
            polygon_mesh_m_vertex_count: 0,
            polygon_mesh_n_vertex_count: 0,
            smooth_surface_m_density: 0,
            smooth_surface_n_density: 0,
            surface_type: 0,
            thickness: 0.0,
            has_vertices: false,
            extrusion_direction: Point::z_axis(),
            seqend: None,
        }
    }
}

impl Polyline {
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn is_3d_polyline(&self) -> bool {
        self.flags & 8 != 0
    }
    pub fn is_polyface_mesh(&self) -> bool {
        self.flags & 64 != 0
    }
}

impl SpecificEntity for Polyline {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.location.set(10, pair)?;
            }
            39 => self.thickness = pair.assert_f64()?,
            40 => self.default_starting_width = pair.assert_f64()?,
            41 => self.default_ending_width = pair.assert_f64()?,
            66 => self.has_vertices = pair.assert_i16()? != 0,
            70 => self.flags = pair.assert_i16()?,
            71 => self.polygon_mesh_m_vertex_count = pair.assert_i16()?,
            72 => self.polygon_mesh_n_vertex_count = pair.assert_i16()?,
            73 => self.smooth_surface_m_density = pair.assert_i16()?,
            74 => self.smooth_surface_n_density = pair.assert_i16()?,
            75 => self.surface_type = pair.assert_i16()?,
            210 | 220 | 230 => {
                self.extrusion_direction.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Vertex {
    pub location: Point,
    #[serde(serialize_with = "serialize_f64")]
    pub starting_width: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub ending_width: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub bulge: f64,
    pub flags: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub curve_fit_tangent_direction: f64,
    pub polyface_mesh_vertex_index1: i16,
    pub polyface_mesh_vertex_index2: i16,
    pub polyface_mesh_vertex_index3: i16,
    pub polyface_mesh_vertex_index4: i16,
    pub identifier: i32,
}

impl SpecificEntity for Vertex {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => {
                self.location.set(10, pair)?;
            }
            40 => self.starting_width = pair.assert_f64()?,
            41 => self.ending_width = pair.assert_f64()?,
            42 => self.bulge = pair.assert_f64()?,
            50 => self.curve_fit_tangent_direction = pair.assert_f64()?,
            70 => self.flags = pair.assert_i16()?,
            71 => self.polyface_mesh_vertex_index1 = pair.assert_i16()?,
            72 => self.polyface_mesh_vertex_index2 = pair.assert_i16()?,
            73 => self.polyface_mesh_vertex_index3 = pair.assert_i16()?,
            74 => self.polyface_mesh_vertex_index4 = pair.assert_i16()?,
            91 => self.identifier = pair.assert_i32()?,
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Spline {
    pub normal: Point,
    pub flags: i16,
    pub degree_of_curve: i16,
    pub number_of_knots: i16,
    pub number_of_control_points: i16,
    pub number_of_fit_points: i16,
    #[serde(serialize_with = "serialize_f64")]
    pub knot_tolerance: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub control_point_tolerance: f64,
    #[serde(serialize_with = "serialize_f64")]
    pub fit_tolerance: f64,
    pub start_tangent: Point,
    pub end_tangent: Point,
    #[serde(serialize_with = "serialize_f64_seq")]
    pub knot_values: Vec<f64>,
    #[serde(serialize_with = "serialize_f64_seq")]
    pub weights: Vec<f64>,
    pub control_points: Vec<Point>,
    pub fit_points: Vec<Point>,
}

impl Default for Spline {
    fn default() -> Self {
        Spline {
            normal: Point::z_axis(),
            flags: 0,
            degree_of_curve: 1,
            number_of_knots: 0,
            number_of_control_points: 0,
            number_of_fit_points: 0,
            knot_tolerance: 0.0000001,
            control_point_tolerance: 0.0000001,
            fit_tolerance: 0.0000000001,
            start_tangent: Point::origin(),
            end_tangent: Point::origin(),
            knot_values: vec![],
            weights: vec![],
            control_points: vec![],
            fit_points: vec![],
        }
    }
}

impl Spline {
    pub fn is_closed(&self) -> bool {
        self.flags & 1 != 0
    }
    pub fn is_rational(&self) -> bool {
        self.flags & 4 != 0
    }
}

/// Applies a coordinate to a point list where the x component starts a new point.
fn apply_point_list(points: &mut Vec<Point>, base: i32, pair: &CodePair) -> DxfResult<()> {
    if pair.code == base || points.is_empty() {
        points.push(Point::origin());
    }
    if let Some(last) = points.last_mut() {
        last.set(base, pair)?;
    }

    Ok(())
}

impl SpecificEntity for Spline {
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        match pair.code {
            10 | 20 | 30 => apply_point_list(&mut self.control_points, 10, pair)?,
            11 | 21 | 31 => apply_point_list(&mut self.fit_points, 11, pair)?,
            12 | 22 | 32 => {
                self.start_tangent.set(12, pair)?;
            }
            13 | 23 | 33 => {
                self.end_tangent.set(13, pair)?;
            }
            40 => self.knot_values.push(pair.assert_f64()?),
            41 => self.weights.push(pair.assert_f64()?),
            42 => self.knot_tolerance = pair.assert_f64()?,
            43 => self.control_point_tolerance = pair.assert_f64()?,
            44 => self.fit_tolerance = pair.assert_f64()?,
            70 => self.flags = pair.assert_i16()?,
            71 => self.degree_of_curve = pair.assert_i16()?,
            72 => self.number_of_knots = pair.assert_i16()?,
            73 => self.number_of_control_points = pair.assert_i16()?,
            74 => self.number_of_fit_points = pair.assert_i16()?,
            210 | 220 | 230 => {
                self.normal.set(210, pair)?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
    fn is_repeating_code(&self, code: i32) -> bool {
        matches!(code, 10 | 20 | 30 | 11 | 21 | 31 | 40 | 41)
    }
}

//! The entity kinds this crate models.  Each kind declares which group codes it reads; every
//! other code ends up in the entity's common properties.

use serde::Serialize;

use crate::{CodePair, DxfResult};

mod blocks;
mod curves;
mod faces;
mod polylines;
mod text;

pub use self::blocks::{Block, Insert};
pub use self::curves::{Arc, Circle, Ellipse, Line, ModelPoint, Ray, XLine};
pub use self::faces::{Face3D, Solid, Trace};
pub use self::polylines::{LwPolyline, LwPolylineVertex, Polyline, Spline, Vertex};
pub use self::text::{Attribute, AttributeDefinition, MText, Text};

/// The kind-specific half of an entity: its declared fields and how group codes map onto them.
pub(crate) trait SpecificEntity {
    /// Applies a declared code pair.  Returns `false` if the code is not declared for this kind.
    fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool>;
    /// Declared codes that collect every occurrence instead of holding a single value.
    fn is_repeating_code(&self, _code: i32) -> bool {
        false
    }
}

/// The specific data of an entity, tagged with its DXF keyword.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum EntityType {
    #[serde(rename = "3DFACE")]
    Face3D(Face3D),
    #[serde(rename = "ARC")]
    Arc(Arc),
    #[serde(rename = "ATTDEF")]
    AttributeDefinition(AttributeDefinition),
    #[serde(rename = "ATTRIB")]
    Attribute(Attribute),
    #[serde(rename = "BLOCK")]
    Block(Block),
    #[serde(rename = "CIRCLE")]
    Circle(Circle),
    #[serde(rename = "ELLIPSE")]
    Ellipse(Ellipse),
    #[serde(rename = "INSERT")]
    Insert(Insert),
    #[serde(rename = "LINE")]
    Line(Line),
    #[serde(rename = "LWPOLYLINE")]
    LwPolyline(LwPolyline),
    #[serde(rename = "MTEXT")]
    MText(MText),
    #[serde(rename = "POINT")]
    ModelPoint(ModelPoint),
    #[serde(rename = "POLYLINE")]
    Polyline(Polyline),
    #[serde(rename = "RAY")]
    Ray(Ray),
    #[serde(rename = "SOLID")]
    Solid(Solid),
    #[serde(rename = "SPLINE")]
    Spline(Spline),
    #[serde(rename = "TEXT")]
    Text(Text),
    #[serde(rename = "TRACE")]
    Trace(Trace),
    #[serde(rename = "VERTEX")]
    Vertex(Vertex),
    #[serde(rename = "XLINE")]
    XLine(XLine),
}

impl EntityType {
    /// Creates the default entity for a DXF keyword, or `None` for kinds that are not modeled.
    pub fn from_type_string(type_string: &str) -> Option<EntityType> {
        let specific = match type_string {
            "3DFACE" => EntityType::Face3D(Default::default()),
            "ARC" => EntityType::Arc(Default::default()),
            "ATTDEF" => EntityType::AttributeDefinition(Default::default()),
            "ATTRIB" => EntityType::Attribute(Default::default()),
            "BLOCK" => EntityType::Block(Default::default()),
            "CIRCLE" => EntityType::Circle(Default::default()),
            "ELLIPSE" => EntityType::Ellipse(Default::default()),
            "INSERT" => EntityType::Insert(Default::default()),
            "LINE" => EntityType::Line(Default::default()),
            "LWPOLYLINE" => EntityType::LwPolyline(Default::default()),
            "MTEXT" => EntityType::MText(Default::default()),
            "POINT" => EntityType::ModelPoint(Default::default()),
            "POLYLINE" => EntityType::Polyline(Default::default()),
            "RAY" => EntityType::Ray(Default::default()),
            "SOLID" => EntityType::Solid(Default::default()),
            "SPLINE" => EntityType::Spline(Default::default()),
            "TEXT" => EntityType::Text(Default::default()),
            "TRACE" => EntityType::Trace(Default::default()),
            "VERTEX" => EntityType::Vertex(Default::default()),
            "XLINE" => EntityType::XLine(Default::default()),
            _ => return None,
        };
        Some(specific)
    }
    /// The DXF keyword of this kind.
    pub fn type_string(&self) -> &'static str {
        match self {
            EntityType::Face3D(_) => "3DFACE",
            EntityType::Arc(_) => "ARC",
            EntityType::AttributeDefinition(_) => "ATTDEF",
            EntityType::Attribute(_) => "ATTRIB",
            EntityType::Block(_) => "BLOCK",
            EntityType::Circle(_) => "CIRCLE",
            EntityType::Ellipse(_) => "ELLIPSE",
            EntityType::Insert(_) => "INSERT",
            EntityType::Line(_) => "LINE",
            EntityType::LwPolyline(_) => "LWPOLYLINE",
            EntityType::MText(_) => "MTEXT",
            EntityType::ModelPoint(_) => "POINT",
            EntityType::Polyline(_) => "POLYLINE",
            EntityType::Ray(_) => "RAY",
            EntityType::Solid(_) => "SOLID",
            EntityType::Spline(_) => "SPLINE",
            EntityType::Text(_) => "TEXT",
            EntityType::Trace(_) => "TRACE",
            EntityType::Vertex(_) => "VERTEX",
            EntityType::XLine(_) => "XLINE",
        }
    }
    fn as_specific_mut(&mut self) -> &mut dyn SpecificEntity {
        match self {
            EntityType::Face3D(e) => e,
            EntityType::Arc(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::Attribute(e) => e,
            EntityType::Block(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Line(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::MText(e) => e,
            EntityType::ModelPoint(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Ray(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::Trace(e) => e,
            EntityType::Vertex(e) => e,
            EntityType::XLine(e) => e,
        }
    }
    fn as_specific(&self) -> &dyn SpecificEntity {
        match self {
            EntityType::Face3D(e) => e,
            EntityType::Arc(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::Attribute(e) => e,
            EntityType::Block(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Insert(e) => e,
            EntityType::Line(e) => e,
            EntityType::LwPolyline(e) => e,
            EntityType::MText(e) => e,
            EntityType::ModelPoint(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Ray(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Text(e) => e,
            EntityType::Trace(e) => e,
            EntityType::Vertex(e) => e,
            EntityType::XLine(e) => e,
        }
    }
    pub(crate) fn apply_code_pair(&mut self, pair: &CodePair) -> DxfResult<bool> {
        self.as_specific_mut().apply_code_pair(pair)
    }
    pub(crate) fn is_repeating_code(&self, code: i32) -> bool {
        self.as_specific().is_repeating_code(code)
    }
}

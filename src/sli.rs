//! Reading SLI mesh files.
//!
//! An SLI file is XML.  It lists node coordinates as `NodeCoords` tags (`NdX`, `NdY` and `NdZ`
//! attributes) and then elements as `Element` tags whose `Type` is `1` for a line or `2` for a
//! face.  Each element's corners are given by the `Nodes` tag that follows it, where every
//! attribute value is a 1-based index into the node list.  Elements become LINE and 3DFACE
//! entities in a single ENTITIES section.

use tracing::{debug, trace, warn};
use xml::common::Position;
use xml::reader::{EventReader, XmlEvent};

use crate::entities::*;
use crate::{DrawingItem, DxfError, DxfResult, DxfWarning, Entity, ParseOptions, Point, Section};

pub(crate) const SLI_LINE_ELEMENT: &str = "1";
pub(crate) const SLI_FACE_ELEMENT: &str = "2";

struct SliElement {
    element_type: String,
    corners: Vec<Point>,
    line: usize,
}

impl SliElement {
    fn corner(&self, index: usize) -> Point {
        self.corners.get(index).cloned().unwrap_or_default()
    }
    fn into_entity(self) -> Option<Entity> {
        let specific = match self.element_type.trim() {
            SLI_LINE_ELEMENT => EntityType::Line(Line::new(self.corner(0), self.corner(1))),
            SLI_FACE_ELEMENT => {
                // a triangle repeats its last corner
                let fourth = if self.corners.len() > 3 {
                    self.corner(3)
                } else {
                    self.corner(2)
                };
                EntityType::Face3D(Face3D {
                    first_corner: self.corner(0),
                    second_corner: self.corner(1),
                    third_corner: self.corner(2),
                    fourth_corner: fourth,
                    edge_flags: 0,
                })
            }
            _ => return None,
        };
        let mut entity = Entity::new(specific);
        entity.line = self.line;
        Some(entity)
    }
}

/// Reads SLI markup into an ENTITIES section and the warnings raised along the way.
pub(crate) fn read_sli(
    text: &str,
    options: &ParseOptions,
) -> DxfResult<(Section, Vec<DxfWarning>)> {
    let mut reader = EventReader::new(text.as_bytes());
    let mut nodes: Vec<Point> = vec![];
    let mut elements: Vec<SliElement> = vec![];
    loop {
        let event = reader.next().map_err(|e| DxfError::MalformedSli {
            message: e.msg().to_string(),
            line: e.position().row as usize + 1,
        })?;
        let line = reader.position().row as usize + 1;
        match event {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                let attribute = |attr_name: &str| {
                    attributes
                        .iter()
                        .find(|a| a.name.local_name == attr_name)
                        .map(|a| a.value.as_str())
                };
                let invalid = |attr_name: &str, value: Option<&str>| DxfError::InvalidSliAttribute {
                    element: name.local_name.clone(),
                    attribute: String::from(attr_name),
                    value: String::from(value.unwrap_or_default()),
                    line,
                };
                let coordinate = |attr_name: &str| -> DxfResult<f64> {
                    let value = attribute(attr_name);
                    value
                        .and_then(|v| v.trim().parse::<f64>().ok())
                        .filter(|f| f.is_finite())
                        .ok_or_else(|| invalid(attr_name, value))
                };
                match name.local_name.as_str() {
                    "NodeCoords" => {
                        nodes.push(Point::new(
                            coordinate("NdX")?,
                            coordinate("NdY")?,
                            coordinate("NdZ")?,
                        ));
                    }
                    "Element" => {
                        let element_type = attribute("Type").ok_or_else(|| invalid("Type", None))?;
                        elements.push(SliElement {
                            element_type: String::from(element_type),
                            corners: vec![],
                            line,
                        });
                    }
                    "Nodes" => {
                        let element = match elements.last_mut() {
                            Some(element) => element,
                            None => {
                                trace!(line, "ignoring Nodes before any Element");
                                continue;
                            }
                        };
                        for attr in &attributes {
                            let index = attr.value.trim().parse::<usize>().map_err(|_| {
                                invalid(&attr.name.local_name, Some(attr.value.as_str()))
                            })?;
                            match index.checked_sub(1).and_then(|i| nodes.get(i)) {
                                Some(node) => element.corners.push(node.clone()),
                                None => warn!(index, line, "SLI node index out of range"),
                            }
                        }
                    }
                    _ => (),
                }
            }
            XmlEvent::EndDocument => break,
            _ => (),
        }
    }

    debug!(
        nodes = nodes.len(),
        elements = elements.len(),
        "read SLI mesh"
    );
    let mut section = Section::new("ENTITIES", 1);
    let mut warnings = vec![];
    for element in elements {
        let element_type = element.element_type.clone();
        let line = element.line;
        match element.into_entity() {
            Some(entity) => section.items.push(DrawingItem::Entity(entity)),
            None if options.report_unsupported_entities => {
                warnings.push(DxfWarning::UnsupportedConstruct {
                    kind: format!("SLI ELEMENT TYPE {}", element_type.trim()),
                    line,
                });
            }
            None => (),
        }
    }

    Ok((section, warnings))
}

//! DXF drawing parser
//!
//! Extracts 2D/3D primitives from a DXF (Drawing Exchange Format) file
//! using the `dxf` crate. Straight segments and polylines become edges,
//! triangular patches become faces, and circles are discretized into
//! closed 32-segment polygons. Entities of any other type are silently
//! skipped. All coordinates pass through the tolerance-snapped
//! deduplicator, so endpoints shared between entities collapse to one
//! vertex index.

use crate::dedup::{SNAP_EPSILON, VertexPool};
use crate::error::{Error, Result};
use crate::model::Geometry;
use dxf::Drawing;
use dxf::entities::EntityType;
use log::debug;
use std::f64::consts::TAU;
use std::path::Path;

/// Segment count used to approximate a circle as a regular polygon
const CIRCLE_SEGMENTS: usize = 32;

/// Parse a DXF file from a path
///
/// # Errors
///
/// Returns [`Error::ParseError`] naming the file when it cannot be opened
/// or is not a valid drawing.
pub fn parse_dxf(path: &Path) -> Result<Geometry> {
    let drawing = Drawing::load_file(path).map_err(|e| Error::parse(path, e.to_string()))?;
    Ok(from_drawing(&drawing))
}

/// Parse DXF content from a string (ASCII DXF)
///
/// # Errors
///
/// Returns [`Error::ParseError`] when the content is not a valid drawing.
pub fn parse_dxf_str(content: &str) -> Result<Geometry> {
    let drawing = Drawing::load(&mut std::io::Cursor::new(content.as_bytes()))
        .map_err(|e| Error::parse(Path::new("<memory>"), e.to_string()))?;
    Ok(from_drawing(&drawing))
}

fn from_drawing(drawing: &Drawing) -> Geometry {
    let mut pool = VertexPool::with_tolerance(SNAP_EPSILON);
    let mut edges: Vec<[usize; 2]> = Vec::new();
    let mut faces: Vec<Vec<usize>> = Vec::new();
    let mut entity_count = 0usize;

    for entity in drawing.entities() {
        entity_count += 1;
        match entity.specific {
            EntityType::Line(ref line) => {
                let start = pool.insert(line.p1.x, line.p1.y, line.p1.z);
                let end = pool.insert(line.p2.x, line.p2.y, line.p2.z);
                edges.push([start, end]);
            }
            EntityType::LwPolyline(ref polyline) => {
                // Lightweight polylines are 2D; points sit at Z = 0
                let indices: Vec<usize> = polyline
                    .vertices
                    .iter()
                    .map(|v| pool.insert(v.x, v.y, 0.0))
                    .collect();
                append_polyline_edges(&mut edges, &indices, polyline.is_closed());
            }
            EntityType::Polyline(ref polyline) => {
                let indices: Vec<usize> = polyline
                    .vertices()
                    .map(|v| pool.insert(v.location.x, v.location.y, v.location.z))
                    .collect();
                append_polyline_edges(&mut edges, &indices, polyline.is_closed());
            }
            EntityType::Face3D(ref face) => {
                let corners = [&face.first_corner, &face.second_corner, &face.third_corner];
                faces.push(
                    corners
                        .iter()
                        .map(|p| pool.insert(p.x, p.y, p.z))
                        .collect(),
                );
            }
            EntityType::Circle(ref circle) => {
                let indices: Vec<usize> = (0..CIRCLE_SEGMENTS)
                    .map(|i| {
                        let angle = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
                        pool.insert(
                            circle.center.x + circle.radius * angle.cos(),
                            circle.center.y + circle.radius * angle.sin(),
                            circle.center.z,
                        )
                    })
                    .collect();
                for i in 0..CIRCLE_SEGMENTS {
                    edges.push([indices[i], indices[(i + 1) % CIRCLE_SEGMENTS]]);
                }
            }
            // Unrecognized entity types are skipped, not an error
            _ => {}
        }
    }

    let layer_count = drawing.layers().count();
    debug!(
        "DXF drawing: {} entities on {} layers, {} unique vertices",
        entity_count,
        layer_count,
        pool.len()
    );

    let mut geometry = Geometry::new();
    geometry.vertices = pool.into_vertices();
    geometry.edges = edges;
    geometry.faces = faces;
    geometry.metadata.insert("units".to_string(), "mm".into());
    geometry.metadata.insert("source".to_string(), "DXF".into());
    geometry
        .metadata
        .insert("layer_count".to_string(), layer_count.into());
    geometry
        .metadata
        .insert("entity_count".to_string(), entity_count.into());
    geometry
}

/// One edge per consecutive point pair, plus a closing edge last→first for
/// closed polylines
fn append_polyline_edges(edges: &mut Vec<[usize; 2]>, indices: &[usize], closed: bool) {
    for pair in indices.windows(2) {
        edges.push([pair[0], pair[1]]);
    }
    if closed && !indices.is_empty() {
        edges.push([indices[indices.len() - 1], indices[0]]);
    }
}

//! Axis-aligned bounding box computation
//!
//! Bounds are a derived value: recomputed fresh from a geometry's vertices
//! on every request, never cached or persisted.

use nalgebra::Point3;
use serde::Serialize;

/// Axis-aligned bounding box with derived extents and center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// Minimum Z coordinate
    pub min_z: f64,
    /// Maximum Z coordinate
    pub max_z: f64,
    /// Extent along X (`max_x - min_x`)
    pub width: f64,
    /// Extent along Y (`max_y - min_y`)
    pub height: f64,
    /// Extent along Z (`max_z - min_z`)
    pub depth: f64,
    /// Midpoint per axis
    pub center: [f64; 3],
}

impl BoundingBox {
    /// Compute the bounding box of a vertex list
    ///
    /// Returns `None` for an empty list — callers must handle "no bounds"
    /// explicitly rather than receiving an error.
    pub fn from_vertices(vertices: &[[f64; 3]]) -> Option<Self> {
        if vertices.is_empty() {
            return None;
        }

        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for vertex in vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex[axis]);
                max[axis] = max[axis].max(vertex[axis]);
            }
        }

        let center = nalgebra::center(&Point3::from(min), &Point3::from(max));

        Some(Self {
            min_x: min[0],
            max_x: max[0],
            min_y: min[1],
            max_y: max[1],
            min_z: min[2],
            max_z: max[2],
            width: max[0] - min[0],
            height: max[1] - min[1],
            depth: max[2] - min[2],
            center: center.coords.into(),
        })
    }
}

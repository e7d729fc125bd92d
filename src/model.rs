//! Unified geometry model produced by all format parsers
//!
//! The model is a passive container: parsers populate it incrementally and
//! it is never mutated after the parser returns. Depending on the source
//! format some fields stay empty — a DXF drawing produces edges (and
//! possibly faces), an STL mesh produces faces only, and a VBScript
//! passthrough produces nothing but metadata.

use serde::Serialize;
use std::collections::BTreeMap;

/// A metadata value attached to a parsed geometry
///
/// Values serialize as plain JSON scalars so downstream consumers never see
/// format-native wrapper types.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Free-form text (units, source tags, raw script content)
    Text(String),
    /// Floating point quantity
    Number(f64),
    /// Non-negative count (entities, layers, triangles)
    Count(usize),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Number(value)
    }
}

impl From<usize> for MetadataValue {
    fn from(value: usize) -> Self {
        MetadataValue::Count(value)
    }
}

/// Unified in-memory shape representation
///
/// Invariants (guaranteed by the parsers, not re-checked here):
/// - every index in `edges` and `faces` is `< vertices.len()`
/// - `vertices` holds no two entries closer than the deduplication
///   tolerance active during the parse that produced it
#[derive(Debug, Clone, Default, Serialize)]
pub struct Geometry {
    /// Vertex coordinates in first-seen order; indices are stable
    /// references used by `edges` and `faces`
    pub vertices: Vec<[f64; 3]>,
    /// Vertex-index pairs, undirected semantically but stored in the
    /// direction the source file traversed them
    pub edges: Vec<[usize; 2]>,
    /// Vertex-index loops (triangles or polygons)
    pub faces: Vec<Vec<usize>>,
    /// Source-format annotations (units, counts, raw script text).
    /// A `BTreeMap` keeps serialized key order deterministic.
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl Geometry {
    /// Create a new empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of unique vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True if the geometry carries no vertices at all
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_geometry_is_empty() {
        let geometry = Geometry::new();
        assert!(geometry.is_empty());
        assert_eq!(geometry.vertex_count(), 0);
        assert_eq!(geometry.edge_count(), 0);
        assert_eq!(geometry.face_count(), 0);
    }

    #[test]
    fn test_metadata_values_serialize_as_plain_scalars() {
        let mut geometry = Geometry::new();
        geometry
            .metadata
            .insert("units".to_string(), MetadataValue::from("mm"));
        geometry
            .metadata
            .insert("triangle_count".to_string(), MetadataValue::from(2usize));
        geometry
            .metadata
            .insert("scale".to_string(), MetadataValue::from(1.5));

        let json = serde_json::to_value(&geometry).unwrap();
        assert_eq!(json["metadata"]["units"], "mm");
        assert_eq!(json["metadata"]["triangle_count"], 2);
        assert_eq!(json["metadata"]["scale"], 1.5);
    }

    #[test]
    fn test_vertices_serialize_as_nested_triples() {
        let mut geometry = Geometry::new();
        geometry.vertices.push([0.0, 1.0, 2.0]);
        geometry.edges.push([0, 0]);

        let json = serde_json::to_value(&geometry).unwrap();
        assert_eq!(json["vertices"][0][2], 2.0);
        assert_eq!(json["edges"][0][1], 0);
    }
}

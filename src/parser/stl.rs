//! STL triangle mesh parser
//!
//! Reads ASCII or binary STL via the `stl_io` crate and emits one face per
//! triangle. Vertices are deduplicated by exact coordinate match — no
//! tolerance rounding, since STL coordinates from the same mesh export are
//! expected to be bit-identical across shared edges. No edges are produced;
//! faces imply the connectivity.

use crate::dedup::VertexPool;
use crate::error::{Error, Result};
use crate::model::Geometry;
use log::debug;
use std::fs::File;
use std::path::Path;

/// Parse an STL file from a path
///
/// # Errors
///
/// Returns [`Error::ParseError`] naming the file when it cannot be opened
/// or its binary/text structure is malformed.
pub fn parse_stl(path: &Path) -> Result<Geometry> {
    let mut file = File::open(path).map_err(|e| Error::parse(path, format!("cannot open: {e}")))?;
    let mesh =
        stl_io::read_stl(&mut file).map_err(|e| Error::parse(path, format!("invalid STL: {e}")))?;
    Ok(from_mesh(&mesh))
}

/// Parse STL content from a string (ASCII STL only)
///
/// # Errors
///
/// Returns [`Error::ParseError`] when the content is not valid ASCII STL.
pub fn parse_stl_str(content: &str) -> Result<Geometry> {
    let mut cursor = std::io::Cursor::new(content.as_bytes());
    let mesh = stl_io::read_stl(&mut cursor)
        .map_err(|e| Error::parse(Path::new("<memory>"), format!("invalid STL: {e}")))?;
    Ok(from_mesh(&mesh))
}

fn from_mesh(mesh: &stl_io::IndexedMesh) -> Geometry {
    let mut pool = VertexPool::exact();
    let mut faces = Vec::with_capacity(mesh.faces.len());

    // Walk triangles in file order so vertex indices are assigned by first
    // appearance in the triangle stream, independent of how stl_io orders
    // its internal vertex table.
    for triangle in &mesh.faces {
        let face: Vec<usize> = triangle
            .vertices
            .iter()
            .map(|&vi| {
                let vertex = &mesh.vertices[vi];
                pool.insert(
                    f64::from(vertex[0]),
                    f64::from(vertex[1]),
                    f64::from(vertex[2]),
                )
            })
            .collect();
        faces.push(face);
    }

    let triangle_count = mesh.faces.len();
    debug!(
        "STL mesh: {} triangles, {} unique vertices",
        triangle_count,
        pool.len()
    );

    let mut geometry = Geometry::new();
    geometry
        .metadata
        .insert("unique_vertices".to_string(), pool.len().into());
    geometry.vertices = pool.into_vertices();
    geometry.faces = faces;
    geometry.metadata.insert("units".to_string(), "mm".into());
    geometry.metadata.insert("source".to_string(), "STL".into());
    geometry
        .metadata
        .insert("triangle_count".to_string(), triangle_count.into());
    geometry
}

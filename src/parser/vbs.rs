//! HFSS VBScript passthrough parser
//!
//! No geometry is extracted: the raw text of a previously generated
//! simulation script is stored verbatim in metadata and HFSS executes the
//! script directly. Vertices, edges and faces stay empty.

use crate::error::Result;
use crate::model::Geometry;
use log::debug;
use std::path::Path;

/// Read a VBScript file and wrap its content in an otherwise empty geometry
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when the file cannot be read. Invalid UTF-8
/// byte sequences are replaced rather than rejected — the script is opaque
/// to this crate.
pub fn parse_vbscript(path: &Path) -> Result<Geometry> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    debug!(
        "VBScript passthrough: {} bytes from {}",
        content.len(),
        path.display()
    );

    let mut geometry = Geometry::new();
    geometry
        .metadata
        .insert("source".to_string(), "HFSS_VBScript".into());
    geometry
        .metadata
        .insert("script_content".to_string(), content.into());
    geometry.metadata.insert(
        "file_path".to_string(),
        path.display().to_string().into(),
    );
    Ok(geometry)
}

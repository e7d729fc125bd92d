//! Load orchestration
//!
//! The loader ties the pipeline together: dispatch to the right parser,
//! validate the result, and either assemble the full [`LoadResult`] or
//! fail the whole call. Validation failure is load failure — a
//! "successful load with invalid geometry" is never returned.

use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use crate::model::Geometry;
use crate::parser::{self, FileFormat};
use crate::validator::{ValidationReport, Validator};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Aggregate result of one successful load
///
/// Serializes to the record consumed by the downstream pipeline: geometry
/// as plain nested arrays, bounds (or null), detected format, counts, and
/// the full validation report including non-fatal warnings and
/// suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct LoadResult {
    /// The parsed geometry
    pub geometry: Geometry,
    /// Bounding box, absent when the geometry has no vertices
    pub bounds: Option<BoundingBox>,
    /// Format the file was parsed as
    pub format: FileFormat,
    /// Number of unique vertices
    pub vertex_count: usize,
    /// Number of faces
    pub face_count: usize,
    /// Number of edges
    pub edge_count: usize,
    /// Full validation report (always `valid: true` here)
    pub validation: ValidationReport,
}

/// Loads and validates one ground plane geometry file
pub struct GndLoader {
    file_path: PathBuf,
    project_path: PathBuf,
}

impl GndLoader {
    /// Create a loader for a geometry file within a project
    ///
    /// The project root is carried for output placement only; it never
    /// affects parsing.
    pub fn new(file_path: impl Into<PathBuf>, project_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            project_path: project_path.into(),
        }
    }

    /// Path of the geometry file this loader reads
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Project root used for output placement
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Run the full pipeline: parse → validate → bound
    ///
    /// # Errors
    ///
    /// Any parser error propagates unchanged. If validation produces
    /// errors the load fails with [`Error::ValidationFailed`] carrying all
    /// of them — no partial geometry is exposed.
    pub fn load(&self) -> Result<LoadResult> {
        info!("loading ground plane geometry from {}", self.file_path.display());
        debug!(
            "project root for output placement: {}",
            self.project_path.display()
        );

        let format = FileFormat::from_path(&self.file_path)?;
        let geometry = parser::parse_file(&self.file_path)?;

        let report = Validator::new(&geometry).report();
        if !report.valid {
            return Err(Error::ValidationFailed {
                errors: report.errors,
            });
        }

        let bounds = BoundingBox::from_vertices(&geometry.vertices);
        info!(
            "loaded {} geometry: {} vertices, {} edges, {} faces",
            format,
            geometry.vertex_count(),
            geometry.edge_count(),
            geometry.face_count()
        );

        Ok(LoadResult {
            vertex_count: geometry.vertex_count(),
            face_count: geometry.face_count(),
            edge_count: geometry.edge_count(),
            bounds,
            format,
            validation: report,
            geometry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::with_suffix(suffix).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// Closed LWPOLYLINE square of side 40
    const SQUARE_DXF: &str = r"0
SECTION
2
HEADER
9
$ACADVER
1
AC1015
0
ENDSEC
0
SECTION
2
ENTITIES
0
LWPOLYLINE
8
0
90
4
70
1
10
0.0
20
0.0
10
40.0
20
0.0
10
40.0
20
40.0
10
0.0
20
40.0
0
ENDSEC
0
EOF
";

    #[test]
    fn test_valid_square_load_succeeds() {
        let file = write_fixture(".dxf", SQUARE_DXF);
        let result = GndLoader::new(file.path(), ".").load().unwrap();

        assert_eq!(result.format, FileFormat::Dxf);
        assert_eq!(result.vertex_count, 4);
        assert_eq!(result.edge_count, 4);
        assert_eq!(result.face_count, 0);
        assert!(result.validation.valid);

        let bounds = result.bounds.unwrap();
        assert_eq!(bounds.width, 40.0);
        assert_eq!(bounds.height, 40.0);
        assert_eq!(bounds.center, [20.0, 20.0, 0.0]);
    }

    #[test]
    fn test_unsupported_extension_fails_before_io() {
        let err = GndLoader::new("shape.iges", ".").load().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_step_load_is_not_implemented() {
        let file = write_fixture(".step", "ISO-10303-21;");
        let err = GndLoader::new(file.path(), ".").load().unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
    }

    #[test]
    fn test_vbscript_load_fails_emptiness_validation() {
        // The passthrough parser produces no vertices, and validation
        // failure is load failure even for passthrough content
        let file = write_fixture(".vbs", "Dim oAnsoftApp\n");
        let err = GndLoader::new(file.path(), ".").load().unwrap_err();
        match err {
            Error::ValidationFailed { errors } => {
                assert!(errors[0].contains("empty"));
            }
            other => panic!("expected ValidationFailed, got {other}"),
        }
    }

    #[test]
    fn test_load_result_serializes_to_plain_json() {
        let file = write_fixture(".dxf", SQUARE_DXF);
        let result = GndLoader::new(file.path(), ".").load().unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["format"], ".dxf");
        assert_eq!(json["vertex_count"], 4);
        assert_eq!(json["validation"]["valid"], true);
        assert_eq!(json["bounds"]["width"], 40.0);
        assert_eq!(json["geometry"]["vertices"][1][0], 40.0);
    }
}

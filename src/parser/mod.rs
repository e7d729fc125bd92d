//! Format-specific parsers for ground plane geometry files
//!
//! Each parser consumes one file and produces a [`Geometry`]. The
//! [`FileFormat`] dispatcher selects the parser from the file extension;
//! it is a pure lookup and performs no file I/O itself.

mod dxf;
mod step;
mod stl;
mod vbs;

pub use dxf::{parse_dxf, parse_dxf_str};
pub use step::parse_step;
pub use stl::{parse_stl, parse_stl_str};
pub use vbs::parse_vbscript;

use crate::error::{Error, Result};
use crate::model::Geometry;
use log::debug;
use serde::{Serialize, Serializer};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

/// File formats recognized by the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DXF vector drawing
    Dxf,
    /// STL triangle mesh (ASCII or binary)
    Stl,
    /// STEP solid model (recognized but not implemented)
    Step,
    /// Previously generated HFSS VBScript, passed through verbatim
    VbScript,
}

impl FileFormat {
    /// Select a format from a file path's extension, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] naming the offending extension
    /// when it maps to no known parser.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = path.extension().and_then(OsStr::to_str).unwrap_or("");
        match raw.to_lowercase().as_str() {
            "dxf" => Ok(FileFormat::Dxf),
            "stl" => Ok(FileFormat::Stl),
            "step" | "stp" => Ok(FileFormat::Step),
            "vbs" => Ok(FileFormat::VbScript),
            other => Err(Error::UnsupportedFormat {
                extension: if other.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{other}")
                },
            }),
        }
    }

    /// Canonical lowercased extension, with leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Dxf => ".dxf",
            FileFormat::Stl => ".stl",
            FileFormat::Step => ".step",
            FileFormat::VbScript => ".vbs",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl Serialize for FileFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.extension())
    }
}

/// Parse a geometry file, dispatching on its extension
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions,
/// [`Error::ParseError`] for malformed files, [`Error::NotImplemented`]
/// for STEP input, or [`Error::Io`] when the file cannot be read.
pub fn parse_file(path: &Path) -> Result<Geometry> {
    let format = FileFormat::from_path(path)?;
    debug!("dispatching {} as {}", path.display(), format);
    match format {
        FileFormat::Dxf => parse_dxf(path),
        FileFormat::Stl => parse_stl(path),
        FileFormat::Step => parse_step(path),
        FileFormat::VbScript => parse_vbscript(path),
    }
}

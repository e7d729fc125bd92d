//! # gnd_import
//!
//! Import and validation pipeline for antenna ground-plane geometry.
//!
//! This library reads user-supplied CAD files (DXF drawings, STL meshes,
//! previously generated HFSS VBScript) into one unified geometry model,
//! deduplicates vertices under numeric tolerance, computes bounds, and
//! decides whether a fixed-footprint antenna can physically be placed on
//! the shape. The decision gates a downstream HFSS simulation pipeline
//! that must never be fed a geometry it cannot use.
//!
//! ## Features
//!
//! - DXF vector drawings (lines, polylines, triangular faces, circles)
//! - STL triangle meshes (ASCII and binary)
//! - HFSS VBScript passthrough (script stored verbatim, no geometry)
//! - Placement feasibility via grid search + point-in-polygon ray casting
//!
//! ## Example
//!
//! ```no_run
//! use gnd_import::GndLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = GndLoader::new("uploads/gnd_files/custom_gnd.dxf", ".").load()?;
//!
//! println!(
//!     "loaded {} vertices, {} edges, valid: {}",
//!     result.vertex_count, result.edge_count, result.validation.valid
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bounds;
pub mod dedup;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod validator;

pub use bounds::BoundingBox;
pub use dedup::{SNAP_EPSILON, VertexPool};
pub use error::{Error, Result};
pub use loader::{GndLoader, LoadResult};
pub use model::{Geometry, MetadataValue};
pub use parser::FileFormat;
pub use validator::{ValidationReport, Validator, ValidatorConfig};

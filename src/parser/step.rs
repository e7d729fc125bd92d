//! STEP placeholder parser
//!
//! STEP import needs a full solid-modeling kernel, which this crate does
//! not carry. The parser always fails rather than ever returning a
//! partially populated geometry.

use crate::error::{Error, Result};
use crate::model::Geometry;
use std::path::Path;

/// Always fails: STEP parsing is not supported yet
///
/// # Errors
///
/// Returns [`Error::NotImplemented`] naming the missing dependency.
pub fn parse_step(path: &Path) -> Result<Geometry> {
    Err(Error::NotImplemented(format!(
        "STEP import for {} requires an OpenCASCADE kernel binding. Coming in a future update.",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_always_fails_with_not_implemented() {
        let err = parse_step(Path::new("solid.step")).unwrap_err();
        match err {
            Error::NotImplemented(message) => {
                assert!(message.contains("solid.step"));
                assert!(message.contains("OpenCASCADE"));
            }
            other => panic!("expected NotImplemented, got {other}"),
        }
    }
}

//! Error types for ground plane import
//!
//! All errors include error codes for categorization and enough context to
//! point the user at the offending file.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: Parse errors (malformed or unreadable source files)
//! - **E3xxx**: Validation errors (geometry unusable for placement)
//! - **E4xxx**: Unsupported formats and features

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type for ground plane import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading a ground plane geometry file
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading a file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Disk read error
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Source file is malformed or not a valid instance of its format
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Truncated or corrupted CAD export
    /// - A file renamed to an extension it does not match
    ///
    /// Parse errors are deterministic for a given input and are never
    /// retried; the message always names the file.
    #[error("[E2001] Failed to parse {file}: {message}")]
    ParseError {
        /// Path of the file that failed to parse
        file: String,
        /// Description of what went wrong
        message: String,
    },

    /// Geometry parsed cleanly but cannot be used as a ground plane
    ///
    /// **Error Code**: E3001
    ///
    /// Carries every error produced by the validation run. Validation
    /// failure is load failure: no partial geometry is exposed.
    #[error("[E3001] Invalid geometry: {}", errors.join(", "))]
    ValidationFailed {
        /// All fatal messages from the validation report, in check order
        errors: Vec<String>,
    },

    /// File extension does not map to any known parser
    ///
    /// **Error Code**: E4001
    ///
    /// **Suggestions**:
    /// - Supported extensions are .dxf, .stl, .step/.stp and .vbs
    #[error("[E4001] Unsupported format: {extension}")]
    UnsupportedFormat {
        /// The offending extension (lowercased, with leading dot)
        extension: String,
    },

    /// Format is recognized but not implemented yet
    ///
    /// **Error Code**: E4002
    ///
    /// Permanent until the feature is added; never returns partial data.
    #[error("[E4002] Not implemented: {0}")]
    NotImplemented(String),
}

impl Error {
    /// Create a `ParseError` naming the offending file
    ///
    /// # Arguments
    /// * `file` - Path of the file that failed to parse
    /// * `message` - Description of the failure (typically the underlying
    ///   parser error)
    pub fn parse(file: &Path, message: impl Into<String>) -> Self {
        Error::ParseError {
            file: file.display().to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let parse_err = Error::parse(Path::new("shape.dxf"), "bad group code");
        assert!(parse_err.to_string().contains("[E2001]"));

        let validation = Error::ValidationFailed {
            errors: vec!["too small".to_string()],
        };
        assert!(validation.to_string().contains("[E3001]"));

        let unsupported = Error::UnsupportedFormat {
            extension: ".obj".to_string(),
        };
        assert!(unsupported.to_string().contains("[E4001]"));

        let not_impl = Error::NotImplemented("STEP".to_string());
        assert!(not_impl.to_string().contains("[E4002]"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = Error::parse(Path::new("uploads/shape.dxf"), "unexpected EOF");
        let message = err.to_string();
        assert!(message.contains("uploads/shape.dxf"));
        assert!(message.contains("unexpected EOF"));
    }

    #[test]
    fn test_validation_failed_joins_errors() {
        let err = Error::ValidationFailed {
            errors: vec!["first".to_string(), "second".to_string()],
        };
        assert!(err.to_string().contains("first, second"));
    }
}

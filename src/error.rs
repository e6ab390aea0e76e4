//! Error types for the mallard backend.
//!
//! Rendering itself never fails; these errors cover loading a serialized
//! document, backend lookup and file I/O.

use std::io;
use thiserror::Error;

/// Result type alias for mallard-backend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The serialized document could not be decoded.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No converter is registered under the requested name.
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    /// No converter produces files with the requested suffix.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownBackend("docbook5".into());
        assert_eq!(err.to_string(), "Unknown backend: docbook5");

        let err = Error::UnknownFormat(".xml".into());
        assert_eq!(err.to_string(), "Unknown output format: .xml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid document JSON"));
    }
}

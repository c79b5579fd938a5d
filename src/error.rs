//! Error types for the jsonpeek library
//!
//! Path evaluation itself never fails: absent values, malformed paths and
//! undecodable text all collapse into an empty result. The errors here belong
//! to the layers around it, reading documents from disk, resolving file
//! arguments and converting YAML input.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for document loading and CLI operations
#[derive(Error, Debug)]
pub enum PeekError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding or encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decoding or encoding errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Regular expression errors
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file is not a JSON or YAML document
    #[error("Unsupported file format: {path} (expected json or yaml)")]
    UnsupportedFormat { path: PathBuf },

    /// The document could not be decoded
    #[error("Invalid document {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// The document exceeds the configured size limit
    #[error("File too large: {path} ({size} bytes, limit {limit} bytes)")]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// Value type conversion errors
    #[error("Type conversion error: cannot convert {from} to {to}")]
    TypeConversion { from: String, to: String },

    /// Path resolution errors
    #[error("Path resolution error: {reason}")]
    PathResolution { reason: String },

    /// Permission errors
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PeekError>;

impl PeekError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new unsupported format error
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a new invalid document error
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new document too large error
    pub fn too_large(path: impl Into<PathBuf>, size: u64, limit: u64) -> Self {
        Self::TooLarge {
            path: path.into(),
            size,
            limit,
        }
    }

    /// Create a new type conversion error
    pub fn type_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::TypeConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a new path resolution error
    pub fn path_resolution(reason: impl Into<String>) -> Self {
        Self::PathResolution {
            reason: reason.into(),
        }
    }

    /// Create a new permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Whether processing of other files can continue after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(io_err) => !matches!(
                io_err.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ),
            Self::FileNotFound { .. } | Self::PermissionDenied { .. } => false,
            Self::Json(_)
            | Self::Yaml(_)
            | Self::Regex(_)
            | Self::UnsupportedFormat { .. }
            | Self::InvalidDocument { .. }
            | Self::TooLarge { .. }
            | Self::TypeConversion { .. }
            | Self::PathResolution { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = PeekError::file_not_found("data.json");
        assert!(matches!(err, PeekError::FileNotFound { .. }));
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "File not found: data.json");
    }

    #[test]
    fn test_too_large_message() {
        let err = PeekError::too_large("big.json", 2048, 1024);
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "File too large: big.json (2048 bytes, limit 1024 bytes)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: PeekError = json_err.into();
        assert!(matches!(err, PeekError::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_not_found_is_fatal() {
        let err: PeekError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_recoverable());

        let err: PeekError = std::io::Error::new(std::io::ErrorKind::Interrupted, "again").into();
        assert!(err.is_recoverable());
    }
}

//! Error types for Sabor operations.

use std::fmt;
use std::path::PathBuf;

/// Main error type for Sabor operations.
///
/// # Examples
///
/// ```
/// use sabor::error::SaborError;
///
/// let err = SaborError::FormatError {
///     message: "bad magic".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid model format"));
/// ```
#[derive(Debug)]
pub enum SaborError {
    /// I/O error (permission denied, short read, etc.).
    Io(std::io::Error),

    /// Model artifact does not exist at the expected path.
    ModelNotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// Invalid or corrupt model artifact.
    FormatError {
        /// Error description
        message: String,
    },

    /// Checksum verification failed.
    ChecksumMismatch {
        /// Expected checksum
        expected: u32,
        /// Actual checksum
        actual: u32,
    },

    /// Artifact parsed but does not satisfy the model contract.
    InvalidModel {
        /// Error description
        message: String,
    },

    /// Serialization/deserialization error.
    Serialization(String),
}

impl fmt::Display for SaborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaborError::Io(e) => write!(f, "I/O error: {e}"),
            SaborError::ModelNotFound { path } => {
                write!(f, "Model file not found: {}", path.display())
            }
            SaborError::FormatError { message } => {
                write!(f, "Invalid model format: {message}")
            }
            SaborError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "Checksum mismatch: expected 0x{expected:08X}, got 0x{actual:08X}"
                )
            }
            SaborError::InvalidModel { message } => {
                write!(f, "Invalid model: {message}")
            }
            SaborError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for SaborError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaborError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaborError {
    fn from(err: std::io::Error) -> Self {
        SaborError::Io(err)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SaborError>;

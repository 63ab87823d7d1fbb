//! Error types for sabor-cli

use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Model artifact missing or unreadable; terminal for the session
    #[error("Model load failed: {0}")]
    ModelLoadFailed(String),

    /// User-typed value outside the closed choice lists or bounds
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidInput(_) => ExitCode::from(2),
            Self::ModelLoadFailed(_) => ExitCode::from(3),
            Self::Serialization(_) => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(7),
        }
    }
}

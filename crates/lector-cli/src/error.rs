//! Error types for the lector CLI.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Not a file (e.g., directory)
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),

    /// Bad flag combination
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error (corpus loading, vectorization, recommendation)
    #[error("{0}")]
    Lector(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) | Self::NotAFile(_) => ExitCode::from(3),
            Self::InvalidArguments(_) => ExitCode::from(2),
            Self::Io(_) => ExitCode::from(7),
            Self::Lector(_) => ExitCode::from(1),
        }
    }
}

impl From<lector::error::LectorError> for CliError {
    fn from(e: lector::error::LectorError) -> Self {
        Self::Lector(e.to_string())
    }
}

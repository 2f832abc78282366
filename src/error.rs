//! Error types for Lector operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Lector operations.
///
/// Covers corpus loading failures, vectorizer misuse, and the dimension
/// and bounds checks performed by the recommendation pipeline.
///
/// # Examples
///
/// ```
/// use lector::error::LectorError;
///
/// let err = LectorError::EmptyCorpus {
///     context: "no articles in input file".to_string(),
/// };
/// assert!(err.to_string().contains("empty corpus"));
/// ```
#[derive(Debug)]
pub enum LectorError {
    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Input file could not be parsed as CSV or JSON.
    Parse {
        /// Path of the offending file
        path: String,
        /// Parser message
        message: String,
    },

    /// The corpus contains no usable articles.
    EmptyCorpus {
        /// Where the empty input was detected
        context: String,
    },

    /// An article has no text.
    MissingText {
        /// Zero-based position of the article in the input
        index: usize,
    },

    /// Vector/matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A component was used before `fit` was called.
    NotFitted {
        /// Component name
        component: String,
    },

    /// An index points outside the corpus.
    IndexOutOfBounds {
        /// Offending index
        index: usize,
        /// Collection length
        len: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for LectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LectorError::Io(e) => write!(f, "I/O error: {e}"),
            LectorError::Parse { path, message } => {
                write!(f, "Failed to parse {path}: {message}")
            }
            LectorError::EmptyCorpus { context } => {
                write!(f, "empty corpus: {context}")
            }
            LectorError::MissingText { index } => {
                write!(f, "article {index} has no text")
            }
            LectorError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            LectorError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            LectorError::NotFitted { component } => {
                write!(f, "{component} is not fitted. Call fit() first")
            }
            LectorError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds (len={len})")
            }
            LectorError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LectorError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LectorError {
    fn from(err: std::io::Error) -> Self {
        LectorError::Io(err)
    }
}

impl From<&str> for LectorError {
    fn from(msg: &str) -> Self {
        LectorError::Other(msg.to_string())
    }
}

impl From<String> for LectorError {
    fn from(msg: String) -> Self {
        LectorError::Other(msg)
    }
}

impl LectorError {
    /// Create a parse error with file context.
    #[must_use]
    pub fn parse(path: &std::path::Path, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an empty corpus error.
    #[must_use]
    pub fn empty_corpus(context: &str) -> Self {
        Self::EmptyCorpus {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LectorError>;

//! Error types for Calluna.

use thiserror::Error;

/// Errors that can occur during lexicon loading, analysis, or report
/// assembly.
#[derive(Error, Debug)]
pub enum CallunaError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Text analysis error.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error.
    #[error("Error: {0}")]
    Other(String),
}

impl CallunaError {
    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        CallunaError::Analysis(message.into())
    }

    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        CallunaError::InvalidConfig(message.into())
    }

    /// Create a not found error.
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        CallunaError::NotFound(message.into())
    }

    /// Create a generic error.
    pub fn other<S: Into<String>>(message: S) -> Self {
        CallunaError::Other(message.into())
    }
}

/// Result type alias for Calluna operations.
pub type Result<T> = std::result::Result<T, CallunaError>;

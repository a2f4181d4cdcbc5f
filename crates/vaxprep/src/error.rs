//! Error types for the vaxprep library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vaxprep operations.
#[derive(Debug, Error)]
pub enum VaxprepError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column required by the coverage pipeline is absent.
    #[error("Missing required column: '{column}'")]
    MissingColumn { column: String },

    /// Empty file or no data to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VaxprepError {
    /// Shorthand for a missing-column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

/// Result type alias for vaxprep operations.
pub type Result<T> = std::result::Result<T, VaxprepError>;

//! Error types for dataset acquisition.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that can occur while reading or writing tabular files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File not found or not readable.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// The file has no header row.
    #[error("CSV input has no header row")]
    MissingHeader,
}

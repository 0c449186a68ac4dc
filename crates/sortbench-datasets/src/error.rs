//! Dataset error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or writing datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Filesystem failure outside of CSV handling.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed CSV, or a field that did not parse into its type.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row whose fields do not parse into the record type.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A failure tied to a specific dataset file.
    #[error("{}: {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: Box<DatasetError>,
    },
}

impl DatasetError {
    /// Attaches the file the error came from.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        DatasetError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

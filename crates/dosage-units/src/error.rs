//! Error types for unit table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a unit table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UnitsError {
    /// Unit table file could not be read.
    #[error("failed to read unit table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row of the unit table could not be parsed.
    #[error("failed to parse unit table {source_name}: {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },
}

impl UnitsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for unit table operations.
pub type Result<T> = std::result::Result<T, UnitsError>;

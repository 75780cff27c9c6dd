//! Error types for extraction.

use std::path::PathBuf;

use thiserror::Error;

use crate::interchange::InterchangeError;

/// Errors that end an extraction call. None are recovered locally.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The type identifier is not registered.
    #[error("Cannot find type {0}")]
    TypeNotFound(String),

    /// The model source text could not be read.
    #[error("Cannot read source file {}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output document could not be written.
    #[error("Cannot write output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be serialized.
    #[error(transparent)]
    Interchange(#[from] InterchangeError),
}

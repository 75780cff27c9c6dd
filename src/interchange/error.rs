//! Error types for document serialization.

use thiserror::Error;

/// Errors that can occur while serializing a document.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

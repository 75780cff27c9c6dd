//! Common trait for document output formats.

use super::InterchangeError;
use super::model::Document;

/// Trait for model-interface document formats.
///
/// Implementations serialize a whole [`Document`] in memory; writing the
/// bytes to disk is left to the caller so that a failed serialization never
/// leaves a partial file behind.
pub trait DocumentFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension, without the dot.
    fn extension(&self) -> &'static str;

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Serialize a document.
    fn write(&self, document: &Document) -> Result<Vec<u8>, InterchangeError>;
}

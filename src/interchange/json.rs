//! JSON export of the document model.

use super::model::Document;
use super::{DocumentFormat, InterchangeError};

/// Pretty-printed JSON of the [`Document`] structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl DocumentFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, InterchangeError> {
        let mut output = serde_json::to_vec_pretty(document)
            .map_err(|e| InterchangeError::json(e.to_string()))?;
        output.push(b'\n');
        Ok(output)
    }
}

//! Model-interface documents and their output formats.
//!
//! - **Crop2ML** - XML model unit consumed by the Crop2ML code generators
//! - **JSON** - the same document structure as JSON
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Document                               │
//! │  - header, identity                                      │
//! │  - inputs / outputs: Vec<MemberDescriptor>               │
//! │  - operations: Vec<OperationDescriptor>                  │
//! └──────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                 DocumentFormat trait                      │
//! │  - write(&Document) -> Result<Vec<u8>>                   │
//! └──────────────────────────────────────────────────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────┐     ┌──────────────┐
//! │ Crop2ML .xml │     │  JSON .json  │
//! └──────────────┘     └──────────────┘
//! ```

mod crop2ml;
mod error;
mod format;
mod json;
pub mod model;

pub use crop2ml::Crop2Ml;
pub use error::InterchangeError;
pub use format::DocumentFormat;
pub use json::Json;
pub use model::{Category, Document, Header, Linkage, MemberDescriptor, OperationDescriptor};

/// Supported file extensions for output formats.
pub fn supported_extensions() -> &'static [&'static str] {
    &["xml", "json"]
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn DocumentFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "xml" => Some(Box::new(Crop2Ml)),
        "json" => Some(Box::new(Json)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("Toy1.xml")).unwrap().name(), "Crop2ML");
        assert_eq!(detect_format(Path::new("Toy1.JSON")).unwrap().name(), "JSON");
        assert!(detect_format(Path::new("Toy1.cs")).is_none());
        assert!(detect_format(Path::new("Toy1")).is_none());
    }
}

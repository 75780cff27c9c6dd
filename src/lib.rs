//! # amei
//!
//! Extracts Crop2ML model-interface descriptions from registered model types
//! and the source text they were written in.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! models      → Bundled descriptors (IWeather, Toy1) and their registry
//!   ↓
//! extract     → introspect / describe / classify / assemble pipeline
//!   ↓
//! parser      → Logos lexer, `field.Member` usage scanner
//!   ↓
//! interchange → Document model, Crop2ML XML and JSON writers
//!   ↓
//! model       → TypeDescriptor, MemberDecl, ValueType, TypeRegistry
//! ```

/// Type descriptors: explicit member registration
pub mod model;

/// Output documents and formats
pub mod interchange;

/// Source scanning: Logos lexer, usage scanner
pub mod parser;

/// The extraction pipeline
pub mod extract;

/// Bundled model descriptors
pub mod models;

pub use extract::{ExtractError, ExtractOptions, Extractor, extract_to_file, output_path_for};
pub use interchange::{Crop2Ml, Document, DocumentFormat, Json};
pub use model::{MemberDecl, TypeDescriptor, TypeRegistry, ValueType, Visibility};
pub use parser::CommentDetection;

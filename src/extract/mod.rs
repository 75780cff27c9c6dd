//! Model-interface extraction.
//!
//! A single linear pipeline per call:
//!
//! ```text
//! TypeDescriptor ──► introspect ──┐
//!                                 ├──► classify ──► assemble ──► Document ──► DocumentFormat
//! source text ────► UsageScanner ─┘        ▲
//!                                          └── describe (summary / units)
//! ```
//!
//! The source file is read once and the output file written once, after the
//! whole document has been serialized in memory. Calls share no state, so
//! independent extractions may run concurrently (see [`Extractor::write_all`]).

mod assemble;
mod classify;
mod describe;
mod error;
mod introspect;
mod options;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

pub use assemble::assemble;
pub use classify::{Classified, Operation, classify};
pub use describe::{Resolved, describe_type, resolve};
pub use error::ExtractError;
pub use introspect::{Introspection, introspect};
pub use options::ExtractOptions;

use crate::interchange::{Document, DocumentFormat};
use crate::model::{TypeDescriptor, TypeRegistry};
use crate::parser::UsageScanner;

/// One independent extraction: a type, its source, and where to write.
#[derive(Debug, Clone)]
pub struct ExtractJob {
    pub descriptor: Arc<TypeDescriptor>,
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Runs the extraction pipeline with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Build the document for `ty` from already loaded source text.
    pub fn describe(&self, ty: &TypeDescriptor, source: &str) -> Document {
        let raw = introspect(ty);
        let scanner = UsageScanner::new(source, self.options.comment_detection);
        let classified = classify(&raw, &scanner);
        debug!(
            ty = %ty.full_name(),
            inputs = classified.inputs.len(),
            outputs = classified.outputs.len(),
            operations = classified.operations.len(),
            "classified members"
        );
        assemble(ty, classified, &self.options)
    }

    /// Read the source file and build the document.
    pub fn describe_file(&self, ty: &TypeDescriptor, source: &Path) -> Result<Document, ExtractError> {
        let text = std::fs::read_to_string(source).map_err(|e| ExtractError::SourceRead {
            path: source.to_path_buf(),
            source: e,
        })?;
        Ok(self.describe(ty, &text))
    }

    /// Extract and write one document. Nothing is written unless the document
    /// was built and serialized successfully.
    pub fn write_file(
        &self,
        ty: &TypeDescriptor,
        source: &Path,
        output: &Path,
        format: &dyn DocumentFormat,
    ) -> Result<(), ExtractError> {
        let document = self.describe_file(ty, source)?;
        let bytes = format.write(&document)?;
        std::fs::write(output, bytes).map_err(|e| ExtractError::OutputWrite {
            path: output.to_path_buf(),
            source: e,
        })?;
        info!(ty = %ty.full_name(), output = %output.display(), "wrote {}", format.name());
        Ok(())
    }

    /// Run independent jobs in parallel. Results are in job order.
    pub fn write_all(
        &self,
        jobs: &[ExtractJob],
        format: &dyn DocumentFormat,
    ) -> Vec<Result<PathBuf, ExtractError>> {
        jobs.par_iter()
            .map(|job| {
                self.write_file(&job.descriptor, &job.source, &job.output, format)
                    .map(|()| job.output.clone())
            })
            .collect()
    }
}

/// Output path next to the source, with the format's extension.
pub fn output_path_for(source: &Path, format: &dyn DocumentFormat) -> PathBuf {
    source.with_extension(format.extension())
}

/// Resolve `type_id` in `registry`, extract from `source`, and write the
/// document beside it. Returns the path written.
///
/// An unknown type fails before anything is read or written.
pub fn extract_to_file(
    registry: &TypeRegistry,
    type_id: &str,
    source: &Path,
    extractor: &Extractor,
    format: &dyn DocumentFormat,
) -> Result<PathBuf, ExtractError> {
    let ty = registry.resolve(type_id)?;
    let output = output_path_for(source, format);
    extractor.write_file(&ty, source, &output, format)?;
    Ok(output)
}

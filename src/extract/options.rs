//! Extraction options

use crate::parser::CommentDetection;

/// Fixed document values and scanning behaviour
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Prepended to the type name, joined by `_`, to form the model id
    pub model_id_prefix: String,
    pub authors: String,
    pub institution: String,
    pub uri: String,
    pub timestep: String,
    pub version: String,
    /// Implementation language of the external routines
    pub language: String,
    /// Directory the external routine files live in
    pub algorithm_dir: String,
    pub algorithm_extension: String,
    pub comment_detection: CommentDetection,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            model_id_prefix: "AP".to_string(),
            authors: "APSIM Initiative".to_string(),
            institution: "APSIM Initiative".to_string(),
            uri: "www.apsim.info".to_string(),
            timestep: "1".to_string(),
            version: "1.0".to_string(),
            language: "cyml".to_string(),
            algorithm_dir: "algo/pyx".to_string(),
            algorithm_extension: "pyx".to_string(),
            comment_detection: CommentDetection::default(),
        }
    }
}

impl ExtractOptions {
    pub fn with_comment_detection(mut self, mode: CommentDetection) -> Self {
        self.comment_detection = mode;
        self
    }

    /// Path of an external routine file, e.g. `algo/pyx/OnStartOfDay.pyx`
    pub fn algorithm_file(&self, stem: &str) -> String {
        format!(
            "{}/{stem}.{}",
            self.algorithm_dir.trim_end_matches('/'),
            self.algorithm_extension
        )
    }
}

//! Resume field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract_fields, ResumeParser};

use crate::models::ExtractionResult;

/// Trait for resume field extractors.
///
/// Extraction is total: a field that cannot be found is left empty, it is
/// never reported as an error.
pub trait ResumeExtractor {
    /// Extract structured fields from decoded document text.
    fn extract_fields(&self, text: &str) -> ExtractionResult;
}

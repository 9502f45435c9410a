//! Rule-based field extractors for resumes.

pub mod normalize;
pub mod contact;
pub mod name;
pub mod skills;
pub mod patterns;

pub use normalize::{normalize, normalize_lines};
pub use contact::{extract_email, extract_phone, EmailExtractor, PhoneExtractor};
pub use name::{extract_name, NameExtractor};
pub use skills::{extract_skills, SkillExtractor};
pub use patterns::*;


/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched field value with its location in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

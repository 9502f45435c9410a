//! Candidate name extraction from document layout.
//!
//! Resumes put the candidate's name on the first visible line. Only that
//! line is considered; if it does not look like a name the field is left
//! empty rather than guessed from later lines.

use super::{ExtractionMatch, FieldExtractor};
use super::patterns::{HEADING_WORDS, NAME_SHAPE};

/// Name field extractor.
#[derive(Debug, Clone, Copy)]
pub struct NameExtractor {
    min_length: usize,
    max_length: usize,
    max_tokens: usize,
}

impl NameExtractor {
    /// Create a name extractor with the default limits (2-50 chars, 3 words).
    pub fn new() -> Self {
        Self {
            min_length: 2,
            max_length: 50,
            max_tokens: 3,
        }
    }

    /// Set accepted length range in characters.
    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Set maximum number of whitespace-separated words.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Whether a trimmed line is shaped like a person's name.
    pub fn is_name_like(&self, line: &str) -> bool {
        let length = line.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        if !NAME_SHAPE.is_match(line) {
            return false;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > self.max_tokens {
            return false;
        }

        tokens.iter().all(|token| {
            token.chars().next().is_some_and(char::is_alphabetic)
                && !HEADING_WORDS.contains(&token.trim_end_matches('.').to_lowercase().as_str())
        })
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                offset += line.len();
                continue;
            }

            if !self.is_name_like(trimmed) {
                return None;
            }

            let start = offset + (line.len() - line.trim_start().len());
            return Some(
                ExtractionMatch::new(trimmed.to_string(), trimmed)
                    .with_position(start, start + trimmed.len()),
            );
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Extract the candidate name from line-preserving text.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}

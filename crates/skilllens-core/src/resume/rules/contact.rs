//! Email and phone number extraction.

use super::{ExtractionMatch, FieldExtractor};
use super::patterns::{EMAIL, PHONE};

/// Fewest digits accepted in a phone number.
const PHONE_MIN_DIGITS: usize = 10;
/// Most digits accepted in a phone number (E.164 maximum).
const PHONE_MAX_DIGITS: usize = 15;

/// Email field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(|m| {
            ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                .with_position(m.start(), m.end())
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Phone field extractor.
///
/// Candidates from the loose [`PHONE`] pattern are kept only if they hold
/// 10 to 15 digits and are not glued to further digits, which filters out
/// year ranges, postal codes and long identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }

    fn accept(text: &str, start: usize, end: usize) -> bool {
        let digits = text[start..end].chars().filter(|c| c.is_ascii_digit()).count();
        if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
            return false;
        }

        let glued_before = text[..start].chars().next_back().is_some_and(|c| c.is_ascii_digit());
        let glued_after = text[end..].chars().next().is_some_and(|c| c.is_ascii_digit());
        !glued_before && !glued_after
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Rejected candidates are rescanned from their second character, so a
    /// postal code or year right before a number does not hide it.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut found = Vec::new();
        let mut at = 0;

        while let Some(m) = PHONE.find_at(text, at) {
            if Self::accept(text, m.start(), m.end()) {
                found.push(
                    ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                        .with_position(m.start(), m.end()),
                );
                at = m.end();
            } else {
                // Matches start with an ASCII digit, `+` or `(`.
                at = m.start() + 1;
            }
        }

        found
    }
}

/// Extract the first email address from text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor::new().extract(text).map(|m| m.value)
}

/// Extract the first phone number from text, verbatim.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text).map(|m| m.value)
}

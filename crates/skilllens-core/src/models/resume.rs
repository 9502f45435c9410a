//! Resume extraction data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured fields extracted from one resume.
///
/// Optional fields are either a plausible value or `None`, never an empty
/// string. `skills` holds canonical vocabulary names only, deduplicated and
/// sorted alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Normalized document text.
    pub text: String,

    /// First email address found.
    pub email: Option<String>,

    /// First phone number found, verbatim.
    pub phone: Option<String>,

    /// Candidate name taken from the first line.
    pub name: Option<String>,

    /// Recognized skills.
    pub skills: Vec<String>,
}

impl ExtractionResult {
    /// Fields that were not found.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.email.is_none() {
            missing.push(Field::Email);
        }
        if self.phone.is_none() {
            missing.push(Field::Phone);
        }
        if self.name.is_none() {
            missing.push(Field::Name);
        }
        if self.skills.is_empty() {
            missing.push(Field::Skills);
        }
        missing
    }

    /// Whether a skill (canonical name) was recognized.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

/// An extractable resume field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Phone,
    Name,
    Skills,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Name => "name",
            Field::Skills => "skills",
        };
        f.write_str(name)
    }
}

/// Extraction result together with diagnostics from the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    /// Extracted fields.
    pub fields: ExtractionResult,

    /// Fields that were not found. Informational only.
    pub missing: Vec<Field>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields() {
        let result = ExtractionResult {
            text: "Jane Doe jane@example.com".to_string(),
            email: Some("jane@example.com".to_string()),
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };

        assert_eq!(result.missing_fields(), vec![Field::Phone, Field::Skills]);
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let result = ExtractionResult::default();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "text": "",
                "email": null,
                "phone": null,
                "name": null,
                "skills": []
            })
        );
    }

    #[test]
    fn test_has_skill() {
        let result = ExtractionResult {
            skills: vec!["docker".to_string(), "python".to_string()],
            ..Default::default()
        };

        assert!(result.has_skill("Python"));
        assert!(!result.has_skill("rust"));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Skills.to_string(), "skills");
        assert_eq!(serde_json::to_string(&Field::Email).unwrap(), "\"email\"");
    }
}

//! Resume parser assembling all rule-based extractors.
//!
//! Every extractor runs independently on one of two views of the input:
//! the collapsed text (email, phone, document-wide skills) or the
//! line-preserving text (name, skills section). Neither view depends on
//! another extractor's output.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::models::{ExtractionConfig, ExtractionResult, ParseReport, SkillStrategy, SkillVocabulary};

use super::rules::{
    contact::{EmailExtractor, PhoneExtractor},
    name::NameExtractor,
    normalize::{normalize, normalize_lines},
    skills::SkillExtractor,
    FieldExtractor,
};
use super::ResumeExtractor;

/// Rule-based resume parser.
///
/// Stateless apart from its read-only configuration, so one parser can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    email: EmailExtractor,
    phone: PhoneExtractor,
    name: NameExtractor,
    skills: SkillExtractor,
}

impl ResumeParser {
    /// Create a parser with the built-in vocabulary and default settings.
    pub fn new() -> Self {
        Self {
            email: EmailExtractor::new(),
            phone: PhoneExtractor::new(),
            name: NameExtractor::new(),
            skills: SkillExtractor::new(SkillVocabulary::builtin()),
        }
    }

    /// Create a parser from configuration, loading the vocabulary file if set.
    pub fn from_config(config: &ExtractionConfig) -> crate::Result<Self> {
        let vocabulary = match &config.vocabulary_path {
            Some(path) => {
                debug!("Loading skill vocabulary from {}", path.display());
                Arc::new(SkillVocabulary::from_file(path)?)
            }
            None => SkillVocabulary::builtin(),
        };

        Ok(Self::new()
            .with_vocabulary(vocabulary)
            .with_skill_strategy(config.skill_strategy)
            .with_name_limits(
                config.name_min_length,
                config.name_max_length,
                config.name_max_tokens,
            ))
    }

    /// Set the skill vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: Arc<SkillVocabulary>) -> Self {
        self.skills = SkillExtractor::new(vocabulary).with_strategy(self.skills.strategy());
        self
    }

    /// Set the skill matching strategy.
    pub fn with_skill_strategy(mut self, strategy: SkillStrategy) -> Self {
        self.skills = self.skills.with_strategy(strategy);
        self
    }

    /// Set name length range and word limit.
    pub fn with_name_limits(mut self, min_length: usize, max_length: usize, max_tokens: usize) -> Self {
        self.name = self
            .name
            .with_length(min_length, max_length)
            .with_max_tokens(max_tokens);
        self
    }

    pub fn skill_strategy(&self) -> SkillStrategy {
        self.skills.strategy()
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        self.skills.vocabulary()
    }

    /// Parse raw document text into fields plus diagnostics.
    pub fn parse(&self, raw: &str) -> ParseReport {
        let start = start_timer();

        info!("Parsing resume from {} characters of text", raw.len());

        let text = normalize(raw);
        let lines = normalize_lines(raw);

        let email = self.email.extract(&text).map(|m| m.value);
        let phone = self.phone.extract(&text).map(|m| m.value);
        let name = self.name.extract(&lines).map(|m| m.value);

        let skills = match self.skills.strategy() {
            SkillStrategy::Document => self.skills.skills(&text),
            SkillStrategy::Section => self.skills.skills(&lines),
        };

        let fields = ExtractionResult {
            text,
            email,
            phone,
            name,
            skills,
        };
        let missing = fields.missing_fields();

        debug!(
            "Extracted {} skills, missing fields: {:?}",
            fields.skills.len(),
            missing
        );

        ParseReport {
            fields,
            missing,
            processing_time_ms: start.map_or(0, |t| t.elapsed().as_millis() as u64),
        }
    }
}

/// `Instant::now` panics on wasm32-unknown-unknown; timing is reported as 0 there.
#[cfg(not(target_arch = "wasm32"))]
fn start_timer() -> Option<Instant> {
    Some(Instant::now())
}

#[cfg(target_arch = "wasm32")]
fn start_timer() -> Option<Instant> {
    None
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeExtractor for ResumeParser {
    fn extract_fields(&self, text: &str) -> ExtractionResult {
        self.parse(text).fields
    }
}

/// Extract fields from document text with the default parser.
///
/// Total: any input, including the empty string, yields a well-formed result.
pub fn extract_fields(text: &str) -> ExtractionResult {
    ResumeParser::new().extract_fields(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::models::{Field, SkillEntry};

    const RESUME: &str = r#"
        John A. Smith
        Seattle, WA | john.smith@example.com | (555) 123-4567

        Summary
        Backend engineer who likes Java and Kafka.

        Skills: Python, SQL, Docker
        Experience
        Acme Corp, 2019 - 2024: Kubernetes, Terraform
    "#;

    #[test]
    fn test_parse_full_resume() {
        let result = ResumeParser::new().extract_fields(RESUME);

        assert_eq!(result.name.as_deref(), Some("John A. Smith"));
        assert_eq!(result.email.as_deref(), Some("john.smith@example.com"));
        assert_eq!(result.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(result.skills, vec!["docker", "python", "sql"]);
        assert!(result.text.starts_with("John A. Smith Seattle, WA"));
        assert!(!result.text.contains('\n'));
    }

    #[test]
    fn test_document_strategy_scans_everything() {
        let parser = ResumeParser::new().with_skill_strategy(SkillStrategy::Document);
        let result = parser.extract_fields(RESUME);

        assert_eq!(
            result.skills,
            vec!["docker", "java", "kafka", "kubernetes", "python", "sql", "terraform"]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let report = ResumeParser::new().parse("");

        assert_eq!(report.fields, ExtractionResult::default());
        assert_eq!(
            report.missing,
            vec![Field::Email, Field::Phone, Field::Name, Field::Skills]
        );
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Arc::new(SkillVocabulary::new([SkillEntry::new("cobol")]).unwrap());
        let parser = ResumeParser::new().with_vocabulary(vocabulary);

        let result = parser.extract_fields("Skills\nCOBOL, Python");
        assert_eq!(result.skills, vec!["cobol"]);
    }

    #[test]
    fn test_with_vocabulary_keeps_strategy() {
        let parser = ResumeParser::new()
            .with_skill_strategy(SkillStrategy::Document)
            .with_vocabulary(SkillVocabulary::builtin());

        assert_eq!(parser.skill_strategy(), SkillStrategy::Document);
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        std::fs::write(&path, r#"["fortran"]"#).unwrap();

        let config = ExtractionConfig {
            skill_strategy: SkillStrategy::Document,
            vocabulary_path: Some(path),
            name_max_tokens: 4,
            ..Default::default()
        };
        let parser = ResumeParser::from_config(&config).unwrap();
        let result = parser.extract_fields("John Ronald Reuel Tolkien\nWrote Fortran and Python");

        assert_eq!(result.name.as_deref(), Some("John Ronald Reuel Tolkien"));
        assert_eq!(result.skills, vec!["fortran"]);
    }

    #[test]
    fn test_from_config_missing_vocabulary_file() {
        let config = ExtractionConfig {
            vocabulary_path: Some("/nonexistent/skills.json".into()),
            ..Default::default()
        };

        assert!(ResumeParser::from_config(&config).is_err());
    }

    #[test]
    fn test_extract_fields_free_function() {
        let result = extract_fields("Jane Doe\x00\njane@example.com");

        assert_eq!(result.name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.text, "Jane Doe jane@example.com");
    }
}

//! Skill extraction against a canonical vocabulary.
//!
//! Two strategies are supported and chosen explicitly through
//! [`SkillStrategy`]:
//!
//! - `Document` tests every vocabulary entry against the whole text.
//! - `Section` finds the skills section by its heading, splits it into
//!   tokens and canonicalizes each token against the vocabulary. Tokens that
//!   match no entry are dropped, so the output never contains raw document
//!   text.
//!
//! Either way the result is deduplicated and sorted by canonical name.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::models::{SkillStrategy, SkillVocabulary};

use super::{ExtractionMatch, FieldExtractor};
use super::patterns::{SECTION_HEADING, SKILL_SEPARATOR, SKILLS_HEADING};

/// Skill field extractor.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: Arc<SkillVocabulary>,
    strategy: SkillStrategy,
}

impl SkillExtractor {
    /// Create a section-scoped extractor over `vocabulary`.
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self {
            vocabulary,
            strategy: SkillStrategy::default(),
        }
    }

    /// Set the matching strategy.
    pub fn with_strategy(mut self, strategy: SkillStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> SkillStrategy {
        self.strategy
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Canonical names of the skills found in `text`.
    pub fn skills(&self, text: &str) -> Vec<String> {
        self.extract_all(text).into_iter().map(|m| m.value).collect()
    }

    fn scan_document(&self, text: &str, found: &mut BTreeMap<String, ExtractionMatch<String>>) {
        self.match_span(text, 0, found);
    }

    fn scan_section(&self, text: &str, found: &mut BTreeMap<String, ExtractionMatch<String>>) {
        let Some((start, end)) = locate_skills_section(text) else {
            debug!("No skills section found");
            return;
        };

        let tokens = split_skill_tokens(&text[start..end]);
        trace!("Skills section has {} tokens", tokens.len());

        for (offset, token) in tokens {
            self.match_span(token, start + offset, found);
        }
    }

    fn match_span(&self, span: &str, base: usize, found: &mut BTreeMap<String, ExtractionMatch<String>>) {
        for term in self.vocabulary.iter() {
            if found.contains_key(term.name()) {
                continue;
            }
            if let Some((s, e)) = term.find(span) {
                found.insert(
                    term.name().to_string(),
                    ExtractionMatch::new(term.name().to_string(), &span[s..e])
                        .with_position(base + s, base + e),
                );
            }
        }
    }
}

impl FieldExtractor for SkillExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// All recognized skills, one match per canonical name, sorted by name.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut found = BTreeMap::new();

        match self.strategy {
            SkillStrategy::Document => self.scan_document(text, &mut found),
            SkillStrategy::Section => self.scan_section(text, &mut found),
        }

        found.into_values().collect()
    }
}

/// Byte span of the skills section body in line-preserving text.
///
/// The body starts right after the first skills heading and ends before the
/// next line that opens another section, or at the end of the text.
pub fn locate_skills_section(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    let mut start = None;

    for line in text.split_inclusive('\n') {
        match start {
            None => {
                if let Some(m) = SKILLS_HEADING.find(line) {
                    start = Some(offset + m.end());
                }
            }
            Some(s) => {
                if SECTION_HEADING.is_match(line) {
                    return Some((s, offset));
                }
            }
        }
        offset += line.len();
    }

    start.map(|s| (s, text.len()))
}

/// Split a skills section body into candidate tokens with their offsets.
///
/// Tokens are separated by commas, semicolons, pipes, newlines and bullet
/// glyphs; leading `-`/`*` markers and surrounding whitespace are stripped
/// and tokens of one character or less are discarded.
pub fn split_skill_tokens(body: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut last = 0;

    let bounds = SKILL_SEPARATOR
        .find_iter(body)
        .map(|m| (m.start(), m.end()))
        .chain(std::iter::once((body.len(), body.len())));

    for (sep_start, sep_end) in bounds {
        let raw_start = last;
        let raw = &body[raw_start..sep_start];
        last = sep_end;

        let stripped = raw.trim_start_matches(is_token_marker);
        let token = stripped.trim_end();
        if token.chars().count() <= 1 {
            continue;
        }

        tokens.push((raw_start + raw.len() - stripped.len(), token));
    }

    tokens
}

fn is_token_marker(c: char) -> bool {
    c == '-' || c == '*' || c.is_whitespace()
}

/// Extract skills from text with the built-in vocabulary.
pub fn extract_skills(text: &str, strategy: SkillStrategy) -> Vec<String> {
    SkillExtractor::new(SkillVocabulary::builtin())
        .with_strategy(strategy)
        .skills(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::models::SkillEntry;

    fn vocabulary() -> Arc<SkillVocabulary> {
        Arc::new(
            SkillVocabulary::new([
                SkillEntry::new("python"),
                SkillEntry::new("sql"),
                SkillEntry::new("docker"),
                SkillEntry::new("java"),
                SkillEntry::with_aliases("javascript", ["js"]),
                SkillEntry::with_aliases("kubernetes", ["k8s"]),
                SkillEntry::new("machine learning"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_section_scoped_until_next_heading() {
        let text = "Jane Doe\nSkills: Python, SQL, Docker\nExperience\nBuilt Kubernetes clusters with Java";
        let extractor = SkillExtractor::new(vocabulary());

        assert_eq!(extractor.skills(text), vec!["docker", "python", "sql"]);
    }

    #[test]
    fn test_section_heading_on_own_line_with_bullets() {
        let text = "TECHNICAL SKILLS\n• Python • k8s\n- Docker\n* Machine Learning; SQL\nEducation:\nBSc, JavaScript club";
        let extractor = SkillExtractor::new(vocabulary());

        assert_eq!(
            extractor.skills(text),
            vec!["docker", "kubernetes", "machine learning", "python", "sql"]
        );
    }

    #[test]
    fn test_section_runs_to_end_without_closing_heading() {
        let text = "Core Skills -\nJava | Python\nDocker";
        let extractor = SkillExtractor::new(vocabulary());

        assert_eq!(extractor.skills(text), vec!["docker", "java", "python"]);
    }

    #[test]
    fn test_section_tokens_canonicalized() {
        let text = "Skills\nProficient in PYTHON and js, some unrelated tool, x";
        let extractor = SkillExtractor::new(vocabulary());

        let found = extractor.extract_all(text);
        assert_eq!(
            found.iter().map(|m| m.value.as_str()).collect::<Vec<_>>(),
            vec!["javascript", "python"]
        );
        let js = &found[0];
        assert_eq!(js.source, "js");
        let (s, e) = js.position.unwrap();
        assert_eq!(&text[s..e], "js");
    }

    #[test]
    fn test_no_section_yields_empty() {
        let text = "Jane Doe\nExperience\nPython developer";
        let extractor = SkillExtractor::new(vocabulary());

        assert!(extractor.skills(text).is_empty());
        assert!(extractor.extract(text).is_none());
    }

    #[test]
    fn test_heading_word_inside_sentence_is_not_a_heading() {
        let text = "My skills include Python\nExperience\nDocker";
        let extractor = SkillExtractor::new(vocabulary());

        assert!(extractor.skills(text).is_empty());
    }

    #[test]
    fn test_document_strategy_whole_word() {
        let extractor = SkillExtractor::new(vocabulary()).with_strategy(SkillStrategy::Document);

        assert_eq!(extractor.skills("Wrote JavaScript daily"), vec!["javascript"]);
        assert_eq!(
            extractor.skills("Wrote JavaScript and Java daily"),
            vec!["java", "javascript"]
        );
    }

    #[test]
    fn test_document_strategy_deduplicates() {
        let extractor = SkillExtractor::new(vocabulary()).with_strategy(SkillStrategy::Document);
        let text = "python Python PYTHON, docker and Docker; python";

        assert_eq!(extractor.skills(text), vec!["docker", "python"]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let extractor = SkillExtractor::new(vocabulary()).with_strategy(SkillStrategy::Document);
        let text = "SQL, k8s, Python, machine learning, Docker";

        let first = extractor.skills(text);
        for _ in 0..5 {
            assert_eq!(extractor.skills(text), first);
        }
    }

    #[test]
    fn test_locate_skills_section_span() {
        let text = "Summary\nSkills: Rust\nGo\nProjects\nx";
        let (start, end) = locate_skills_section(text).unwrap();

        assert_eq!(&text[start..end], " Rust\nGo\n");
    }

    #[test]
    fn test_split_skill_tokens() {
        let body = " Python, SQL;  - Docker | x\n• Machine Learning ";
        let tokens = split_skill_tokens(body);

        assert_eq!(
            tokens.iter().map(|(_, t)| *t).collect::<Vec<_>>(),
            vec!["Python", "SQL", "Docker", "Machine Learning"]
        );
        for (offset, token) in tokens {
            assert_eq!(&body[offset..offset + token.len()], token);
        }
    }

    #[test]
    fn test_extract_skills_builtin() {
        let skills = extract_skills("Skills: Postgres, React, Rust\nEducation", SkillStrategy::Section);
        assert_eq!(skills, vec!["postgresql", "react", "rust"]);
    }
}

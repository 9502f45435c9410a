//! Canonical skill vocabulary.
//!
//! A vocabulary is an ordered set of canonical skill names, each with
//! optional aliases. Every entry is compiled once into a case-insensitive
//! matcher built from escaped literals only, so matching stays linear in the
//! length of the text. A match must not touch an alphabetic character on
//! either side: `java` does not match inside `javascript`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VocabularyError;

/// Built-in skills as `(canonical name, aliases)`.
const BUILTIN_SKILLS: &[(&str, &[&str])] = &[
    // Languages
    ("python", &[]),
    ("java", &[]),
    ("javascript", &["js", "ecmascript"]),
    ("typescript", &[]),
    ("c++", &["cpp"]),
    ("c#", &["csharp"]),
    ("rust", &[]),
    ("golang", &[]),
    ("ruby", &[]),
    ("php", &[]),
    ("kotlin", &[]),
    ("swift", &[]),
    ("objective-c", &[]),
    ("scala", &[]),
    ("haskell", &[]),
    ("elixir", &[]),
    ("perl", &[]),
    ("matlab", &[]),
    ("dart", &[]),
    ("solidity", &[]),
    ("bash", &["shell scripting"]),
    ("sql", &[]),
    ("html", &["html5"]),
    ("css", &["css3"]),
    ("sass", &["scss"]),
    // Frameworks and libraries
    ("react", &["react.js", "reactjs"]),
    ("react native", &[]),
    ("angular", &["angularjs"]),
    ("vue", &["vue.js", "vuejs"]),
    ("next.js", &["nextjs"]),
    ("node.js", &["nodejs", "node"]),
    ("express.js", &["expressjs"]),
    ("django", &[]),
    ("flask", &[]),
    ("fastapi", &[]),
    ("spring boot", &["springboot"]),
    ("ruby on rails", &["rails"]),
    ("laravel", &[]),
    ("asp.net", &[]),
    (".net", &["dotnet"]),
    ("flutter", &[]),
    ("tailwind css", &["tailwind", "tailwindcss"]),
    ("graphql", &[]),
    ("rest api", &["rest apis", "restful"]),
    ("grpc", &[]),
    ("microservices", &[]),
    // Data and machine learning
    ("pandas", &[]),
    ("numpy", &[]),
    ("scikit-learn", &["sklearn"]),
    ("tensorflow", &[]),
    ("pytorch", &[]),
    ("keras", &[]),
    ("machine learning", &[]),
    ("deep learning", &[]),
    ("nlp", &["natural language processing"]),
    ("computer vision", &[]),
    ("data analysis", &[]),
    ("apache spark", &["spark", "pyspark"]),
    ("hadoop", &[]),
    ("airflow", &[]),
    ("dbt", &[]),
    ("tableau", &[]),
    ("power bi", &["powerbi"]),
    ("excel", &["microsoft excel"]),
    // Databases
    ("postgresql", &["postgres"]),
    ("mysql", &[]),
    ("sqlite", &[]),
    ("oracle", &[]),
    ("mongodb", &["mongo"]),
    ("redis", &[]),
    ("elasticsearch", &[]),
    ("snowflake", &[]),
    ("bigquery", &[]),
    ("kafka", &["apache kafka"]),
    ("rabbitmq", &[]),
    // Infrastructure
    ("docker", &[]),
    ("kubernetes", &["k8s"]),
    ("aws", &["amazon web services"]),
    ("azure", &["microsoft azure"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("terraform", &[]),
    ("ansible", &[]),
    ("jenkins", &[]),
    ("ci/cd", &["cicd"]),
    ("linux", &[]),
    ("nginx", &[]),
    ("git", &[]),
    // Testing
    ("selenium", &[]),
    ("cypress", &[]),
    ("jest", &[]),
    ("junit", &[]),
    ("pytest", &[]),
    // Product and process
    ("agile", &[]),
    ("scrum", &[]),
    ("jira", &[]),
    ("figma", &[]),
    ("photoshop", &["adobe photoshop"]),
];

lazy_static! {
    static ref BUILTIN_VOCABULARY: Arc<SkillVocabulary> = Arc::new(
        SkillVocabulary::new(
            BUILTIN_SKILLS
                .iter()
                .map(|(name, aliases)| SkillEntry::with_aliases(*name, aliases.iter().copied())),
        )
        .expect("built-in skill vocabulary is valid")
    );
}

/// A vocabulary entry as supplied by configuration.
///
/// Deserializes from either a bare string or `{"name": ..., "aliases": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEntry")]
pub struct SkillEntry {
    /// Canonical skill name.
    pub name: String,
    /// Alternative spellings that map to `name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(name: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for SkillEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SkillEntry {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        aliases: Vec<String>,
    },
}

impl From<RawEntry> for SkillEntry {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Name(name) => SkillEntry::new(name),
            RawEntry::Full { name, aliases } => SkillEntry { name, aliases },
        }
    }
}

/// A compiled vocabulary entry.
#[derive(Debug, Clone)]
pub struct SkillTerm {
    name: String,
    aliases: Vec<String>,
    matcher: Regex,
}

impl SkillTerm {
    fn compile(name: String, aliases: Vec<String>) -> Result<Self, VocabularyError> {
        let mut spellings: Vec<&str> = std::iter::once(name.as_str())
            .chain(aliases.iter().map(String::as_str))
            .collect();
        // Longest first so the reported span covers the most specific spelling.
        spellings.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = spellings
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"(?i)(?:^|\P{{Alphabetic}})({alternation})(?:\P{{Alphabetic}}|$)");

        let matcher = Regex::new(&pattern).map_err(|source| VocabularyError::Pattern {
            term: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            aliases,
            matcher,
        })
    }

    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative spellings.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether the term occurs as a whole word or phrase in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Byte span of the first whole-word occurrence in `text`.
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.matcher
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| (m.start(), m.end()))
    }
}

/// An ordered set of canonical skills, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    terms: Vec<SkillTerm>,
}

impl SkillVocabulary {
    /// Build a vocabulary from entries.
    ///
    /// Names and aliases are trimmed and lowercased. Entries sharing a name
    /// are merged and keep the position of the first occurrence.
    pub fn new<I, E>(entries: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = E>,
        E: Into<SkillEntry>,
    {
        let mut order: Vec<String> = Vec::new();
        let mut merged: HashMap<String, Vec<String>> = HashMap::new();

        for entry in entries {
            let entry = entry.into();
            let name = canonicalize(&entry.name).ok_or_else(|| VocabularyError::EmptyTerm(entry.name.clone()))?;

            let aliases = merged.entry(name.clone()).or_insert_with(|| {
                order.push(name.clone());
                Vec::new()
            });

            for alias in &entry.aliases {
                let alias = canonicalize(alias).ok_or_else(|| VocabularyError::EmptyTerm(entry.name.clone()))?;
                if alias != name && !aliases.contains(&alias) {
                    aliases.push(alias);
                }
            }
        }

        let terms = order
            .into_iter()
            .map(|name| {
                let aliases = merged.remove(&name).unwrap_or_default();
                SkillTerm::compile(name, aliases)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Built skill vocabulary with {} terms", terms.len());
        Ok(Self { terms })
    }

    /// The built-in vocabulary, shared.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN_VOCABULARY)
    }

    /// Parse a vocabulary from a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let entries: Vec<SkillEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a vocabulary from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&content)?)
    }

    /// Number of canonical skills.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate terms in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillTerm> {
        self.terms.iter()
    }

    /// Look up a term by canonical name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&SkillTerm> {
        let name = name.trim().to_lowercase();
        self.terms.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Export entries, e.g. for writing a vocabulary file.
    pub fn entries(&self) -> Vec<SkillEntry> {
        self.terms
            .iter()
            .map(|t| SkillEntry::with_aliases(t.name.clone(), t.aliases.iter().cloned()))
            .collect()
    }
}

fn canonicalize(term: &str) -> Option<String> {
    let term = term.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if term.is_empty() { None } else { Some(term) }
}

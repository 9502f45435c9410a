//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for skilllens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillLensConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Document decoding configuration.
    pub document: DocumentConfig,
}

/// How skills are located in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStrategy {
    /// Match the vocabulary inside the detected skills section only.
    #[default]
    Section,
    /// Match the vocabulary anywhere in the document.
    Document,
}

impl std::str::FromStr for SkillStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "section" => Ok(Self::Section),
            "document" => Ok(Self::Document),
            other => Err(format!("unknown skill strategy: {other}")),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Skill matching strategy.
    pub skill_strategy: SkillStrategy,

    /// JSON vocabulary file replacing the built-in skill list.
    pub vocabulary_path: Option<PathBuf>,

    /// Minimum candidate name length in characters.
    pub name_min_length: usize,

    /// Maximum candidate name length in characters.
    pub name_max_length: usize,

    /// Maximum number of words in a candidate name.
    pub name_max_tokens: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            skill_strategy: SkillStrategy::Section,
            vocabulary_path: None,
            name_min_length: 2,
            name_max_length: 50,
            name_max_tokens: 3,
        }
    }
}

/// Document decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Largest accepted upload in bytes.
    pub max_file_size: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl SkillLensConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

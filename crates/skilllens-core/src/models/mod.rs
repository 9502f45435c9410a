//! Data models: extraction results, skill vocabulary and configuration.

pub mod config;
pub mod resume;
pub mod vocabulary;

pub use config::{DocumentConfig, ExtractionConfig, SkillLensConfig, SkillStrategy};
pub use resume::{ExtractionResult, Field, ParseReport};
pub use vocabulary::{SkillEntry, SkillTerm, SkillVocabulary};

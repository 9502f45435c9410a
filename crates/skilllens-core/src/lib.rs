//! Core library for resume field extraction.
//!
//! This crate provides:
//! - Text normalization of decoded documents
//! - Contact extraction (email, phone)
//! - Candidate name heuristics
//! - Skill extraction against a canonical vocabulary
//! - PDF, DOCX and plain text decoding (feature gated)
//!
//! ```
//! use skilllens_core::extract_fields;
//!
//! let result = extract_fields("Jane Doe\njane@example.com\nSkills: Rust, SQL");
//! assert_eq!(result.name.as_deref(), Some("Jane Doe"));
//! assert_eq!(result.email.as_deref(), Some("jane@example.com"));
//! assert_eq!(result.skills, vec!["rust", "sql"]);
//! ```

pub mod document;
pub mod error;
pub mod models;
pub mod resume;

pub use document::{DecodedDocument, DocumentDecoder, DocumentFormat, TextDecoder};
pub use error::{DecodeError, Result, SkillLensError, VocabularyError};
pub use models::{
    ExtractionConfig, ExtractionResult, Field, ParseReport, SkillEntry, SkillLensConfig,
    SkillStrategy, SkillVocabulary,
};
pub use resume::rules::{normalize, normalize_lines};
pub use resume::{extract_fields, ResumeExtractor, ResumeParser};

//! Error types for the skilllens-core library.
//!
//! Field extraction itself never fails: a field that cannot be found is
//! `None`. These errors cover the code around the pipeline: decoding
//! uploaded documents, building vocabularies and loading configuration.

use thiserror::Error;

/// Main error type for the skilllens library.
#[derive(Error, Debug)]
pub enum SkillLensError {
    /// Document decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Skill vocabulary error.
    #[error("vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning uploaded bytes into plain text.
///
/// A document that decodes successfully but contains no text is not an
/// error; see [`crate::document::DecodedDocument::is_empty`].
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The declared type is not PDF, DOCX or text and sniffing did not help.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The upload exceeds the configured size limit.
    #[error("document is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },

    /// Failed to parse the PDF or extract its text.
    #[error("failed to read PDF: {0}")]
    Pdf(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Failed to open the DOCX container or parse its body.
    #[error("failed to read DOCX: {0}")]
    Docx(String),

    /// The format is recognized but support was compiled out.
    #[error("{0} support is not enabled in this build")]
    FeatureDisabled(&'static str),
}

/// Errors raised while building a skill vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// A skill name or alias is empty after trimming.
    #[error("empty skill term in entry {0:?}")]
    EmptyTerm(String),

    /// A term could not be compiled into a matcher.
    #[error("invalid pattern for {term:?}: {source}")]
    Pattern {
        term: String,
        #[source]
        source: regex::Error,
    },

    /// The vocabulary file is not valid JSON.
    #[error("failed to parse vocabulary: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the skilllens library.
pub type Result<T> = std::result::Result<T, SkillLensError>;

//! Document decoding module.
//!
//! Turns uploaded bytes into plain text for the extraction pipeline. The
//! pipeline never depends on this module; it only consumes the decoded
//! string.

mod decoder;
#[cfg(feature = "docx")]
mod docx;
#[cfg(feature = "pdf")]
mod pdf;

pub use decoder::{DocumentDecoder, PlainTextDecoder};
#[cfg(feature = "docx")]
pub use docx::DocxDecoder;
#[cfg(feature = "pdf")]
pub use pdf::PdfDecoder;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// MIME type of DOCX documents.
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word processing document.
    Docx,
    /// UTF-8 text.
    PlainText,
}

impl DocumentFormat {
    /// Resolve a format from a MIME type, ignoring parameters.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_lowercase();
        match essence.as_str() {
            "application/pdf" | "application/x-pdf" => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            m if m.starts_with("text/") => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Resolve a format from a file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "text" | "md" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Resolve a format from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Guess the format from the leading bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        let head = &data[..data.len().min(1024)];

        if head.windows(5).any(|w| w == b"%PDF-") {
            Some(Self::Pdf)
        } else if data.starts_with(b"PK\x03\x04") {
            Some(Self::Docx)
        } else if std::str::from_utf8(data).is_ok() {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    /// Canonical MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => DOCX_MIME,
            Self::PlainText => "text/plain",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "text",
        };
        f.write_str(name)
    }
}

/// Text decoded from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedDocument {
    /// Format the bytes were decoded as.
    pub format: DocumentFormat,
    /// Decoded text, unnormalized.
    pub text: String,
    /// Number of pages, when the format has pages.
    pub page_count: Option<u32>,
}

impl DecodedDocument {
    /// Whether decoding succeeded but produced no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Trait for format-specific decoders.
pub trait TextDecoder {
    /// Decode document bytes into text.
    fn decode(&self, data: &[u8]) -> Result<DecodedDocument>;
}

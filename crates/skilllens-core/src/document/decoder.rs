//! Format dispatch and plain text decoding.

use tracing::{debug, info};

use super::{DecodedDocument, DocumentFormat, Result, TextDecoder};
use crate::error::DecodeError;
use crate::models::DocumentConfig;

/// Decoder for UTF-8 text; invalid sequences are replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecoder;

impl TextDecoder for PlainTextDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedDocument> {
        let text = String::from_utf8_lossy(data);
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text).to_string();

        Ok(DecodedDocument {
            format: DocumentFormat::PlainText,
            text,
            page_count: None,
        })
    }
}

/// Decodes uploads of any supported format.
///
/// A decoding failure is an `Err`; a document that decodes to nothing is
/// `Ok` with [`DecodedDocument::is_empty`] set.
#[derive(Debug, Clone)]
pub struct DocumentDecoder {
    max_file_size: usize,
}

impl DocumentDecoder {
    /// Create a decoder with the default size limit.
    pub fn new() -> Self {
        Self::from_config(&DocumentConfig::default())
    }

    pub fn from_config(config: &DocumentConfig) -> Self {
        Self {
            max_file_size: config.max_file_size,
        }
    }

    /// Set the largest accepted input in bytes.
    pub fn with_max_file_size(mut self, max_file_size: usize) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Resolve the format from the declared MIME type, sniffing the bytes
    /// when the type is missing or generic.
    pub fn resolve_format(&self, data: &[u8], declared_mime: &str) -> Result<DocumentFormat> {
        let declared = declared_mime.trim();

        if declared.is_empty() || declared.eq_ignore_ascii_case("application/octet-stream") {
            return DocumentFormat::sniff(data)
                .ok_or_else(|| DecodeError::UnsupportedFormat("unrecognized binary content".to_string()));
        }

        DocumentFormat::from_mime(declared)
            .ok_or_else(|| DecodeError::UnsupportedFormat(declared.to_string()))
    }

    /// Decode bytes declared as `declared_mime` into text.
    pub fn decode_to_text(&self, data: &[u8], declared_mime: &str) -> Result<DecodedDocument> {
        let format = self.resolve_format(data, declared_mime)?;
        self.decode_as(data, format)
    }

    /// Decode bytes as a known format.
    pub fn decode_as(&self, data: &[u8], format: DocumentFormat) -> Result<DecodedDocument> {
        if data.len() > self.max_file_size {
            return Err(DecodeError::TooLarge {
                size: data.len(),
                limit: self.max_file_size,
            });
        }

        info!("Decoding {} bytes as {}", data.len(), format);

        let document = match format {
            DocumentFormat::PlainText => PlainTextDecoder.decode(data)?,
            DocumentFormat::Pdf => decode_pdf(data)?,
            DocumentFormat::Docx => decode_docx(data, self.max_file_size)?,
        };

        debug!(
            "Decoded {} characters, pages: {:?}",
            document.text.len(),
            document.page_count
        );
        Ok(document)
    }
}

impl Default for DocumentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "pdf")]
fn decode_pdf(data: &[u8]) -> Result<DecodedDocument> {
    super::PdfDecoder.decode(data)
}

#[cfg(not(feature = "pdf"))]
fn decode_pdf(_data: &[u8]) -> Result<DecodedDocument> {
    Err(DecodeError::FeatureDisabled("PDF"))
}

#[cfg(feature = "docx")]
fn decode_docx(data: &[u8], max_size: usize) -> Result<DecodedDocument> {
    super::DocxDecoder::new(max_size).decode(data)
}

#[cfg(not(feature = "docx"))]
fn decode_docx(_data: &[u8], _max_size: usize) -> Result<DecodedDocument> {
    Err(DecodeError::FeatureDisabled("DOCX"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_text() {
        let doc = DocumentDecoder::new()
            .decode_to_text("\u{FEFF}Jane Doe\njane@example.com".as_bytes(), "text/plain")
            .unwrap();

        assert_eq!(doc.format, DocumentFormat::PlainText);
        assert_eq!(doc.text, "Jane Doe\njane@example.com");
        assert_eq!(doc.page_count, None);
    }

    #[test]
    fn test_decode_lossy_text() {
        let doc = PlainTextDecoder.decode(b"Jos\xe9").unwrap();
        assert_eq!(doc.text, "Jos\u{FFFD}");
    }

    #[test]
    fn test_empty_document_is_not_an_error() {
        let doc = DocumentDecoder::new().decode_to_text(b"  \n ", "text/plain").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_sniffs_generic_mime() {
        let decoder = DocumentDecoder::new();

        assert_eq!(
            decoder.resolve_format(b"plain words", "application/octet-stream").unwrap(),
            DocumentFormat::PlainText
        );
        assert_eq!(decoder.resolve_format(b"%PDF-1.4", "").unwrap(), DocumentFormat::Pdf);
        assert!(matches!(
            decoder.resolve_format(&[0xff, 0xd8, 0xff, 0xe0], ""),
            Err(DecodeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_unsupported_mime() {
        let err = DocumentDecoder::new()
            .decode_to_text(b"GIF89a", "image/gif")
            .unwrap_err();

        assert!(matches!(err, DecodeError::UnsupportedFormat(ref m) if m == "image/gif"));
    }

    #[test]
    fn test_too_large() {
        let err = DocumentDecoder::new()
            .with_max_file_size(4)
            .decode_to_text(b"Jane Doe", "text/plain")
            .unwrap_err();

        assert!(matches!(err, DecodeError::TooLarge { size: 8, limit: 4 }));
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_corrupt_pdf_is_an_error() {
        let err = DocumentDecoder::new()
            .decode_to_text(b"%PDF-1.7 definitely not a pdf", "application/pdf")
            .unwrap_err();

        assert!(matches!(err, DecodeError::Pdf(_)));
    }
}

//! PDF text extraction using lopdf and pdf-extract.

use std::borrow::Cow;

use lopdf::Document;
use tracing::debug;

use super::{DecodedDocument, DocumentFormat, Result, TextDecoder};
use crate::error::DecodeError;

/// PDF decoder.
///
/// lopdf validates the file, counts pages and removes empty-password
/// encryption; pdf-extract produces the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDecoder;

impl PdfDecoder {
    /// Parse the document and return it with bytes pdf-extract can read.
    fn load(data: &[u8]) -> Result<(Document, Cow<'_, [u8]>)> {
        let mut doc = Document::load_mem(data).map_err(|e| DecodeError::Pdf(e.to_string()))?;

        if !doc.is_encrypted() {
            return Ok((doc, Cow::Borrowed(data)));
        }

        if doc.decrypt("").is_err() {
            return Err(DecodeError::Encrypted);
        }
        debug!("Decrypted PDF with empty password");

        let mut decrypted = Vec::new();
        doc.save_to(&mut decrypted)
            .map_err(|e| DecodeError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;

        Ok((doc, Cow::Owned(decrypted)))
    }
}

impl TextDecoder for PdfDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedDocument> {
        let (doc, raw) = Self::load(data)?;

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(DecodeError::NoPages);
        }

        let text = pdf_extract::extract_text_from_mem(&raw)
            .map_err(|e| DecodeError::Pdf(e.to_string()))?;

        debug!("Extracted {} characters from {} pages", text.len(), page_count);

        Ok(DecodedDocument {
            format: DocumentFormat::Pdf,
            text,
            page_count: Some(page_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_a_pdf_error() {
        let err = PdfDecoder.decode(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, DecodeError::Pdf(_)));
    }

    #[test]
    fn test_empty_input() {
        assert!(PdfDecoder.decode(&[]).is_err());
    }
}

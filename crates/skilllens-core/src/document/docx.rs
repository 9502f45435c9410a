//! DOCX text extraction using zip and quick-xml.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{DecodedDocument, DocumentFormat, Result, TextDecoder};
use crate::error::DecodeError;
use crate::models::DocumentConfig;

const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX decoder reading the main document part.
///
/// `max_size` bounds the inflated size of `word/document.xml`, not just
/// the compressed upload.
#[derive(Debug, Clone, Copy)]
pub struct DocxDecoder {
    max_size: usize,
}

impl DocxDecoder {
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    fn too_large(&self, size: u64) -> DecodeError {
        DecodeError::TooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            limit: self.max_size,
        }
    }
}

impl Default for DocxDecoder {
    fn default() -> Self {
        Self::new(DocumentConfig::default().max_file_size)
    }
}

impl TextDecoder for DocxDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedDocument> {
        let mut archive =
            ZipArchive::new(Cursor::new(data)).map_err(|e| DecodeError::Docx(e.to_string()))?;

        let part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| DecodeError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?;

        let limit = self.max_size as u64;
        if part.size() > limit {
            return Err(self.too_large(part.size()));
        }

        // The declared size can lie; never inflate past the limit.
        let mut body = Vec::new();
        part.take(limit.saturating_add(1))
            .read_to_end(&mut body)
            .map_err(|e| DecodeError::Docx(e.to_string()))?;
        if body.len() as u64 > limit {
            return Err(self.too_large(body.len() as u64));
        }

        let xml = String::from_utf8(body).map_err(|e| DecodeError::Docx(e.to_string()))?;

        Ok(DecodedDocument {
            format: DocumentFormat::Docx,
            text: document_xml_to_text(&xml)?,
            page_count: None,
        })
    }
}

/// Flatten WordprocessingML into text.
///
/// Only `w:t` runs contribute characters. Paragraph ends and explicit
/// breaks become newlines, `w:tab` becomes a tab.
pub fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(|e| DecodeError::Docx(e.to_string()))? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                let unescaped = t.unescape().map_err(|e| DecodeError::Docx(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::document::DOCX_MIME;

    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
<w:p><w:r><w:t xml:space="preserve">jane@example.com </w:t></w:r><w:r><w:tab/><w:t>R&amp;D</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>Skills:</w:t><w:br/><w:t>Rust, Go</w:t></w:r></w:p>
</w:body>
</w:document>"#;

    fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

        for (name, content) in parts {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }

        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_document_xml_to_text() {
        let text = document_xml_to_text(BODY).unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com \tR&D\n\nSkills:\nRust, Go\n");
    }

    #[test]
    fn test_decode_docx() {
        let data = build_docx(&[("[Content_Types].xml", "<Types/>"), (DOCUMENT_PART, BODY)]);
        let doc = DocxDecoder::default().decode(&data).unwrap();

        assert_eq!(doc.format, DocumentFormat::Docx);
        assert!(doc.text.starts_with("Jane Doe\n"));
        assert_eq!(doc.page_count, None);
    }

    #[test]
    fn test_missing_document_part() {
        let data = build_docx(&[("word/styles.xml", "<w:styles/>")]);
        let err = DocxDecoder::default().decode(&data).unwrap_err();

        assert!(matches!(err, DecodeError::Docx(ref m) if m.contains(DOCUMENT_PART)));
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(DocxDecoder::default().decode(b"plain text"), Err(DecodeError::Docx(_))));
    }

    #[test]
    fn test_inflated_body_over_limit() {
        let paragraph = "<w:p><w:r><w:t>aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa</w:t></w:r></w:p>";
        let body = format!(
            r#"<w:document xmlns:w="x"><w:body>{}</w:body></w:document>"#,
            paragraph.repeat(20_000)
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
        let data = writer.finish().unwrap().into_inner();

        let limit = 64 * 1024;
        assert!(data.len() < limit);

        let err = DocxDecoder::new(limit).decode(&data).unwrap_err();
        assert!(matches!(err, DecodeError::TooLarge { limit: l, .. } if l == limit));

        let err = crate::DocumentDecoder::new()
            .with_max_file_size(limit)
            .decode_to_text(&data, DOCX_MIME)
            .unwrap_err();
        assert!(matches!(err, DecodeError::TooLarge { .. }));

        assert!(DocxDecoder::new(body.len()).decode(&data).is_ok());
    }

    #[test]
    fn test_empty_body_decodes_to_empty_document() {
        let body = r#"<w:document xmlns:w="x"><w:body><w:p/></w:body></w:document>"#;
        let data = build_docx(&[(DOCUMENT_PART, body)]);

        assert!(DocxDecoder::default().decode(&data).unwrap().is_empty());
    }
}

//! Text extraction from uploaded document bytes.
//!
//! Formats are tried in a fixed order (PDF, then DOCX) and every parser
//! failure just moves on to the next format. Only when no parser yields
//! non-blank text does extraction fail. No OCR and no raw byte decoding.

use std::io::{Cursor, Read};

use lopdf::Document;
use quick_xml::events::Event;
use quick_xml::Reader;
use studysage_core::{Error, Result};
use tracing::debug;

/// Document formats the extractor understands, in attempt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    pub const ATTEMPT_ORDER: [FileType; 2] = [FileType::Pdf, FileType::Docx];

    fn parse(self, bytes: &[u8]) -> std::result::Result<String, String> {
        match self {
            Self::Pdf => extract_pdf(bytes),
            Self::Docx => extract_docx(bytes),
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Docx => write!(f, "docx"),
        }
    }
}

/// Extract text, reporting which format produced it.
pub fn extract_document(bytes: &[u8]) -> Result<(FileType, String)> {
    for file_type in FileType::ATTEMPT_ORDER {
        match file_type.parse(bytes) {
            Ok(text) if !text.trim().is_empty() => {
                debug!("Extracted {} chars as {}", text.len(), file_type);
                return Ok((file_type, text));
            }
            Ok(_) => debug!("{} parser found no text", file_type),
            Err(e) => debug!("{} parser failed: {}", file_type, e),
        }
    }
    Err(Error::UnsupportedFormat)
}

/// Extract plain text from a PDF or DOCX document.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    extract_document(bytes).map(|(_, text)| text)
}

/// Concatenate the text of every page in page order.
fn extract_pdf(bytes: &[u8]) -> std::result::Result<String, String> {
    let doc = Document::load_mem(bytes).map_err(|e| format!("Invalid PDF: {}", e))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc
            .extract_text(&[*page_number])
            .map_err(|e| format!("Failed to read page {}: {}", page_number, e))?;
        text.push_str(&page_text);
    }
    Ok(text)
}

/// Concatenate body paragraphs, each followed by a newline.
fn extract_docx(bytes: &[u8]) -> std::result::Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| format!("Invalid DOCX container: {}", e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| format!("Missing word/document.xml: {}", e))?
        .read_to_string(&mut xml)
        .map_err(|e| format!("Failed to read word/document.xml: {}", e))?;

    let paragraphs = docx_paragraphs(&xml).map_err(|e| format!("Malformed document.xml: {}", e))?;

    let mut text = String::new();
    for paragraph in paragraphs {
        text.push_str(&paragraph);
        text.push('\n');
    }
    Ok(text)
}

/// Text of each top-level body paragraph.
///
/// Table cells and paragraphs nested inside text boxes are skipped; within a
/// run, `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>` a newline.
fn docx_paragraphs(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut para_depth = 0usize;
    let mut table_depth = 0usize;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        let collecting = para_depth == 1 && table_depth == 0 && in_run;
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    para_depth += 1;
                    if para_depth == 1 {
                        current.clear();
                    }
                }
                b"w:tbl" => table_depth += 1,
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if para_depth == 0 && table_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if collecting => current.push('\t'),
                b"w:br" | b"w:cr" if collecting => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if collecting && in_text => {
                current.push_str(&e.unescape()?);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if para_depth == 1 && table_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    para_depth = para_depth.saturating_sub(1);
                }
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

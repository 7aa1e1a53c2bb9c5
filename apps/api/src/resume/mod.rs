//! Resume Extractor: uploaded file bytes to raw resume text.
//!
//! PDF goes through `pdf-extract`, DOCX is read straight from its zip
//! container, plain text is decoded as UTF-8. Images would need OCR and are
//! rejected. Parsing is CPU-bound; handlers call this inside `spawn_blocking`.

pub mod handlers;

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const MB: usize = 1024 * 1024;
pub const MAX_IMAGE_BYTES: usize = 10 * MB;
pub const MAX_DOCUMENT_BYTES: usize = 25 * MB;

const DOCX_BODY_PATH: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    Unsupported(String),

    #[error("file exceeds the {limit_mb}MB limit")]
    TooLarge { limit_mb: usize },

    #[error("no text found in the document")]
    NoText,

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Docx,
    PlainText,
    Image,
    Unsupported,
}

impl FileKind {
    /// Classifies by MIME type first, then by file extension.
    pub fn classify(file_name: &str, content_type: Option<&str>) -> Self {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .unwrap_or_default();
        match mime.as_str() {
            "application/pdf" => return FileKind::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                return FileKind::Docx
            }
            "text/plain" | "text/markdown" => return FileKind::PlainText,
            m if m.starts_with("image/") => return FileKind::Image,
            _ => {}
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => FileKind::Pdf,
            "docx" => FileKind::Docx,
            "txt" | "md" => FileKind::PlainText,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" => FileKind::Image,
            _ => FileKind::Unsupported,
        }
    }

    fn size_limit(self) -> usize {
        match self {
            FileKind::Image => MAX_IMAGE_BYTES,
            _ => MAX_DOCUMENT_BYTES,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedText {
    pub text: String,
    pub kind: FileKind,
    pub char_count: usize,
    pub word_count: usize,
}

/// Extracts trimmed text from an uploaded resume.
pub fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<ExtractedText, ExtractError> {
    let kind = FileKind::classify(file_name, content_type);
    if bytes.len() > kind.size_limit() {
        return Err(ExtractError::TooLarge {
            limit_mb: kind.size_limit() / MB,
        });
    }

    let raw = match kind {
        FileKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        FileKind::Docx => extract_docx(bytes)?,
        FileKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        FileKind::Image => {
            return Err(ExtractError::Unsupported(
                "images require OCR; upload a PDF, DOCX or text file".to_string(),
            ))
        }
        FileKind::Unsupported => {
            return Err(ExtractError::Unsupported(
                content_type.unwrap_or(file_name).to_string(),
            ))
        }
    };

    let text = raw.trim().to_string();
    if text.is_empty() {
        return Err(ExtractError::NoText);
    }

    Ok(ExtractedText {
        char_count: text.chars().count(),
        word_count: text.split_whitespace().count(),
        text,
        kind,
    })
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY_PATH)
        .map_err(|e| ExtractError::Docx(format!("{DOCX_BODY_PATH}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    Ok(docx_xml_to_text(&xml))
}

fn docx_break_re() -> &'static Regex {
    static DOCX_BREAK_RE: OnceLock<Regex> = OnceLock::new();
    DOCX_BREAK_RE.get_or_init(|| {
        Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").expect("valid break regex")
    })
}

fn xml_tag_re() -> &'static Regex {
    static XML_TAG_RE: OnceLock<Regex> = OnceLock::new();
    XML_TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

/// Flattens WordprocessingML into plain text: paragraph ends and breaks
/// become newlines, tabs become `\t`, all other markup is dropped.
fn docx_xml_to_text(xml: &str) -> String {
    let with_breaks = docx_break_re().replace_all(xml, "\n");
    let with_tabs = with_breaks.replace("<w:tab/>", "\t");
    let stripped = xml_tag_re().replace_all(&with_tabs, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

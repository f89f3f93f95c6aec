//! Text Extractor: turns an uploaded document into a single lowercase string.
//!
//! The document format is picked from the filename suffix. Anything that is not
//! `.pdf` or `.docx` is decoded as UTF-8 plain text.

mod docx;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("malformed PDF: {0}")]
    Pdf(String),

    #[error("malformed DOCX: {0}")]
    Docx(String),

    #[error("document is not valid UTF-8 text")]
    InvalidUtf8,
}

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Case-sensitive suffix match; unknown suffixes fall back to `PlainText`.
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if filename.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::PlainText
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "text",
        }
    }

    /// Extracts the raw (not yet lowercased) text of `bytes` in this format.
    pub fn extract(self, bytes: &[u8]) -> Result<String, ExtractionError> {
        match self {
            DocumentFormat::Pdf => extract_pdf(bytes),
            DocumentFormat::Docx => docx::extract_docx(bytes),
            DocumentFormat::PlainText => extract_plain(bytes),
        }
    }
}

/// Extracts text from an uploaded document and lowercases it.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = DocumentFormat::from_filename(filename).extract(bytes)?;
    Ok(text.to_lowercase())
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

fn extract_plain(bytes: &[u8]) -> Result<String, ExtractionError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| ExtractionError::InvalidUtf8)
}

/// One-page PDF whose only line reads "Python Developer with Docker and AWS".
#[cfg(test)]
pub(crate) const SAMPLE_PDF: &[u8] = include_bytes!("../../tests/fixtures/resume.pdf");

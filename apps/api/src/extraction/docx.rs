use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Concatenates the text of every non-empty top-level body paragraph, each
/// followed by a single space. Paragraphs nested in tables or text boxes are
/// skipped.
pub(super) fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    paragraphs_text(&xml)
}

fn paragraphs_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut paragraph = String::new();
    let mut table_depth = 0usize;
    // Text box content is stored inline in a body run, often twice (Choice and Fallback).
    let mut text_box_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:txbxContent" => text_box_depth += 1,
            Ok(Event::End(e)) if e.name().as_ref() == b"w:txbxContent" => {
                text_box_depth = text_box_depth.saturating_sub(1)
            }
            Ok(Event::Start(_) | Event::End(_) | Event::Empty(_) | Event::Text(_))
                if text_box_depth > 0 => {}
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:p" => paragraph.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => paragraph.push('\t'),
                b"w:br" | b"w:cr" => paragraph.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                paragraph.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                b"w:p" => {
                    if table_depth == 0 && !paragraph.is_empty() {
                        out.push_str(&paragraph);
                        out.push(' ');
                    }
                    paragraph.clear();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Docx(format!(
                    "XML error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}

//! Text extraction: turns an uploaded document (bytes + filename hint) into plain text.
//!
//! Extraction is a layered pipeline: the format-specific parser runs first, and an empty
//! or failed result falls through to a lossy UTF-8 decode. No failure reaches the caller;
//! an unreadable document yields an empty string.

pub mod docx;
pub mod pdf;

use tracing::{debug, warn};

/// An uploaded document. Lives only for the duration of one extraction call.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub bytes: &'a [u8],
    /// Used only to pick a parsing strategy; may be empty.
    pub filename: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(bytes: &'a [u8], filename: &'a str) -> Self {
        Self { bytes, filename }
    }
}

/// Parsing strategy chosen from the filename hint and content sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    WordProcessor,
    PlainText,
}

impl DocumentFormat {
    pub fn detect(document: &Document<'_>) -> Self {
        let filename = document.filename.trim().to_ascii_lowercase();
        if filename.ends_with(".pdf") || pdf::looks_like_pdf(document.bytes) {
            DocumentFormat::Pdf
        } else if filename.ends_with(".docx") || filename.ends_with(".doc") {
            DocumentFormat::WordProcessor
        } else {
            DocumentFormat::PlainText
        }
    }
}

/// Extracts plain text from a document. Returns an empty string when nothing is readable.
pub fn extract_text(document: &Document<'_>) -> String {
    if document.bytes.is_empty() {
        return String::new();
    }

    let format = DocumentFormat::detect(document);
    debug!(
        "Extracting text from '{}' ({} bytes) as {:?}",
        document.filename,
        document.bytes.len(),
        format
    );

    let parsed = match format {
        DocumentFormat::Pdf => pdf::extract(document.bytes),
        DocumentFormat::WordProcessor => docx::extract(document.bytes),
        DocumentFormat::PlainText => None,
    };

    if let Some(text) = parsed {
        return text;
    }

    if format != DocumentFormat::PlainText {
        warn!(
            "{:?} parsing of '{}' produced no text, falling back to raw decode",
            format, document.filename
        );
    }

    decode_lossy(document.bytes)
}

/// Best-effort UTF-8 decode that drops undecodable sequences instead of replacing them.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out.trim().to_string()
}

/// Trims the result of a parser and maps "nothing readable" to `None`.
pub(crate) fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

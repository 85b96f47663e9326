use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::warn;

use super::non_empty;

/// Extracts non-empty paragraph texts joined by newlines.
pub fn extract(data: &[u8]) -> Option<String> {
    let package = match read_docx(data) {
        Ok(package) => package,
        Err(e) => {
            warn!("DOCX extraction failed: {e}");
            return None;
        }
    };

    let paragraphs: Vec<String> = package
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => paragraph_text(paragraph),
            _ => None,
        })
        .collect();

    non_empty(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> Option<String> {
    let mut buffer = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(text) => buffer.push_str(&text.text),
                    RunChild::Tab(_) => buffer.push('\t'),
                    RunChild::Break(_) => buffer.push('\n'),
                    _ => {}
                }
            }
        }
    }

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

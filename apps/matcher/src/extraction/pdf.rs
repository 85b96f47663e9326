use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::non_empty;

pub fn looks_like_pdf(data: &[u8]) -> bool {
    data.starts_with(b"%PDF-")
}

/// Extracts the text of every page, one page per block, separated by newlines.
pub fn extract(data: &[u8]) -> Option<String> {
    let pages = extract_pages(data)?;
    debug!("PDF has {} pages", pages.len());
    non_empty(join_pages(&pages))
}

/// Raw text of each page in page order, or `None` when the document cannot be parsed.
pub fn extract_pages(data: &[u8]) -> Option<Vec<String>> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    match result {
        Ok(Ok(pages)) => Some(pages),
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            None
        }
        Err(_) => {
            warn!("PDF extraction aborted on malformed input");
            None
        }
    }
}

/// Trims each page, drops blank ones and joins the rest with newlines.
fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref().trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

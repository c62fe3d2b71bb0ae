//! PDF to plain text.

use lopdf::Document;
use std::path::Path;

use crate::error::Result;
use crate::io::PdfReader;

/// Extract the text of every page, in page order, with no separator.
///
/// A page whose extraction fails contributes nothing instead of failing the
/// whole document.
pub fn extract_document_text(doc: &Document) -> String {
    let mut text = String::new();

    for page_number in doc.get_pages().into_keys() {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(err) => {
                tracing::warn!(page = page_number, "no text extracted from page: {err}");
            }
        }
    }

    text
}

/// Load `path` and extract its text.
///
/// Documents without pages are accepted and yield an empty string.
pub fn pdf_file_to_text(path: &Path) -> Result<String> {
    let loaded = PdfReader::lenient().load(path)?;
    Ok(extract_document_text(&loaded.document))
}

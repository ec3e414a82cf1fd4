//! Single-file PDF inspection: page counts and basic metadata

use lopdf::{Dictionary, Document};
use std::path::Path;

use crate::error::{Error, Result};

/// Read the page count from the Count field of the page tree root.
/// This is more reliable than get_pages() which doesn't handle nested page trees.
fn count_from_page_tree(doc: &Document) -> Result<usize> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_object(catalog_id)?.as_dict()?;

    let pages_id = catalog.get(b"Pages")?.as_reference()?;
    let pages = doc.get_object(pages_id)?.as_dict()?;

    let count = pages.get(b"Count")?.as_i64()?;
    usize::try_from(count)
        .map_err(|_| Error::General(format!("Page count is negative: {count}")))
}

/// Basic PDF metadata
#[derive(Debug, Clone)]
pub struct PdfMetadata {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
}

/// Read a text entry from the Info dictionary, if present and valid UTF-8
fn info_string(info: &Dictionary, key: &[u8]) -> Option<String> {
    let bytes = info.get(key).ok()?.as_str().ok()?;
    String::from_utf8(bytes.to_vec()).ok()
}

/// Count the number of pages in a PDF file
///
/// A quick operation that reads the Count field from the page tree root.
/// Zero pages is a valid count.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    count_from_page_tree(&doc)
}

/// Read page count plus title/author from a PDF file
pub fn read_metadata(path: &Path) -> Result<PdfMetadata> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_from_page_tree(&doc)?;

    let mut title = None;
    let mut author = None;

    // Info dictionary is optional; ignore it entirely when absent or malformed
    if let Ok(info_ref) = doc.trailer.get(b"Info") {
        if let Ok(info_id) = info_ref.as_reference() {
            if let Ok(info) = doc.get_object(info_id).and_then(|obj| obj.as_dict()) {
                title = info_string(info, b"Title");
                author = info_string(info, b"Author");
            }
        }
    }

    Ok(PdfMetadata {
        page_count,
        title,
        author,
    })
}

//! Folder scanning: total pages across all PDFs directly inside a directory

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::pdf::count_pages;

/// Outcome for a single `.pdf` entry in a scanned folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The file parsed as a PDF with this many pages
    Counted(usize),
    /// The file could not be read or parsed; carries the error text
    Failed(String),
}

/// One entry of a scan: a filename paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub filename: String,
    pub outcome: PageOutcome,
}

impl FileRecord {
    /// Page count for this record, or None if the file failed to parse
    pub fn pages(&self) -> Option<usize> {
        match &self.outcome {
            PageOutcome::Counted(pages) => Some(*pages),
            PageOutcome::Failed(_) => None,
        }
    }
}

/// Result of scanning one folder
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Sum of page counts over successfully-parsed files only
    pub total_pages: usize,
    /// One record per `.pdf` entry, in directory-listing order
    pub records: Vec<FileRecord>,
}

impl ScanResult {
    /// Number of records that failed to parse
    pub fn failure_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, PageOutcome::Failed(_)))
            .count()
    }
}

/// Scan a folder and total the pages across every PDF directly inside it.
///
/// Enumeration is non-recursive and follows directory-listing order, which is
/// filesystem-dependent. Entries whose name ends in a case-insensitive `.pdf`
/// each produce one record; everything else produces no record at all. A file
/// that fails to open or parse becomes a `Failed` record and contributes
/// nothing to the total - a single bad file never aborts the scan.
pub fn scan_folder(folder: &Path) -> Result<ScanResult> {
    if !folder.is_dir() {
        return Err(Error::NotADirectory(folder.to_path_buf()));
    }

    let mut result = ScanResult::default();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let filename = entry.file_name().to_string_lossy().into_owned();

        if !filename.to_ascii_lowercase().ends_with(".pdf") {
            continue;
        }

        // Anything named *.pdf is attempted, even a directory; the load
        // failure becomes the record's error text
        let outcome = match count_pages(&entry.path()) {
            Ok(pages) => {
                result.total_pages += pages;
                PageOutcome::Counted(pages)
            }
            Err(e) => PageOutcome::Failed(e.to_string()),
        };

        result.records.push(FileRecord { filename, outcome });
    }

    Ok(result)
}

//! Integration tests for the pdf-tally library
//!
//! Fixture PDFs are synthesized with lopdf instead of being checked in:
//! a minimal Catalog/Pages/Page tree is all the scanner ever looks at.

use std::fs;
use std::path::Path;

use lopdf::{dictionary, Document, Object};
use tempfile::TempDir;

use pdf_tally::cost::{estimate_cost, PrintOptions};
use pdf_tally::pdf::{count_pages, read_metadata};
use pdf_tally::scan::{scan_folder, PageOutcome};

/// Write a minimal valid PDF with the given number of pages
fn write_pdf(path: &Path, pages: usize) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..pages {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).expect("Failed to write fixture PDF");
}

/// Write a file that claims to be a PDF but is not one
fn write_garbage(path: &Path) {
    fs::write(path, b"this is not a pdf at all").expect("Failed to write garbage file");
}

#[test]
fn test_scan_folder_with_valid_pdfs() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    write_pdf(&dir.path().join("a.pdf"), 1);
    write_pdf(&dir.path().join("b.pdf"), 2);
    write_pdf(&dir.path().join("c.pdf"), 3);

    let scan = scan_folder(dir.path()).expect("Scan failed");

    assert_eq!(scan.total_pages, 6);
    assert_eq!(scan.records.len(), 3);

    // read_dir order is filesystem-dependent, so sort before asserting
    let mut records = scan.records.clone();
    records.sort_by(|a, b| a.filename.cmp(&b.filename));

    assert_eq!(records[0].filename, "a.pdf");
    assert_eq!(records[0].outcome, PageOutcome::Counted(1));
    assert_eq!(records[1].outcome, PageOutcome::Counted(2));
    assert_eq!(records[2].outcome, PageOutcome::Counted(3));
}

#[test]
fn test_scan_continues_past_corrupt_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    write_pdf(&dir.path().join("good1.pdf"), 4);
    write_garbage(&dir.path().join("broken.pdf"));
    write_pdf(&dir.path().join("good2.pdf"), 5);

    let scan = scan_folder(dir.path()).expect("Scan failed");

    // The corrupt file gets a record but contributes nothing to the total
    assert_eq!(scan.total_pages, 9);
    assert_eq!(scan.records.len(), 3);
    assert_eq!(scan.failure_count(), 1);

    let failed = scan
        .records
        .iter()
        .find(|r| matches!(r.outcome, PageOutcome::Failed(_)))
        .expect("Expected one failed record");
    assert_eq!(failed.filename, "broken.pdf");
}

#[test]
fn test_scan_ignores_non_pdf_files() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    write_pdf(&dir.path().join("doc.pdf"), 2);
    fs::write(dir.path().join("notes.txt"), "plain text").expect("Failed to write txt");
    fs::write(dir.path().join("image.png"), [0x89, 0x50, 0x4e, 0x47]).expect("Failed to write png");

    let scan = scan_folder(dir.path()).expect("Scan failed");

    // Non-.pdf entries produce no record at all
    assert_eq!(scan.records.len(), 1);
    assert_eq!(scan.total_pages, 2);
}

#[test]
fn test_scan_suffix_match_is_case_insensitive() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    write_pdf(&dir.path().join("lower.pdf"), 1);
    write_pdf(&dir.path().join("UPPER.PDF"), 2);
    write_pdf(&dir.path().join("Mixed.Pdf"), 3);

    let scan = scan_folder(dir.path()).expect("Scan failed");

    assert_eq!(scan.records.len(), 3);
    assert_eq!(scan.total_pages, 6);
}

#[test]
fn test_scan_empty_folder() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    let scan = scan_folder(dir.path()).expect("Scan failed");

    assert_eq!(scan.total_pages, 0);
    assert!(scan.records.is_empty());
}

#[test]
fn test_scan_counts_zero_page_pdf() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    write_pdf(&dir.path().join("empty.pdf"), 0);

    let scan = scan_folder(dir.path()).expect("Scan failed");

    assert_eq!(scan.records.len(), 1);
    assert_eq!(scan.records[0].outcome, PageOutcome::Counted(0));
    assert_eq!(scan.total_pages, 0);
}

#[test]
fn test_count_pages_single_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("six.pdf");
    write_pdf(&path, 6);

    let pages = count_pages(&path).expect("Failed to count pages");
    assert_eq!(pages, 6);
}

#[test]
fn test_read_metadata_with_info_dictionary() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("titled.pdf");

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Quarterly Report"),
        "Author" => Object::string_literal("Accounting"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.save(&path).expect("Failed to write fixture PDF");

    let metadata = read_metadata(&path).expect("Failed to read metadata");
    assert_eq!(metadata.page_count, 1);
    assert_eq!(metadata.title.as_deref(), Some("Quarterly Report"));
    assert_eq!(metadata.author.as_deref(), Some("Accounting"));
}

#[test]
fn test_scan_then_estimate_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp directory");

    write_pdf(&dir.path().join("a.pdf"), 7);
    write_pdf(&dir.path().join("b.pdf"), 3);
    write_garbage(&dir.path().join("junk.pdf"));

    let scan = scan_folder(dir.path()).expect("Scan failed");
    assert_eq!(scan.total_pages, 10);

    // ceil((10 / 2) / 2) = 3 sheets at $2.00 each
    let options = PrintOptions {
        price_per_sheet: 2.0,
        duplex: true,
        pages_per_sheet: 2,
    };
    let estimate = estimate_cost(scan.total_pages, &options).expect("Estimate failed");

    assert_eq!(estimate.sheets, 3);
    assert_eq!(estimate.cost, 6.0);
}

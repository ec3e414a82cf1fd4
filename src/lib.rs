//! PDF Tally Library
//!
//! A library for counting pages across the PDF files in a folder and
//! estimating printing cost. This library provides functionality to:
//! - Count pages in a single PDF (via the page tree root)
//! - Scan a folder and total pages across all PDFs, tolerating bad files
//! - Estimate physical sheets and cost for a print job
//! - Extract basic metadata (title, author)
//!
//! # Example
//!
//! ```no_run
//! use pdf_tally::cost::{estimate_cost, PrintOptions};
//! use pdf_tally::scan::scan_folder;
//! use std::path::Path;
//!
//! let scan = scan_folder(Path::new("handouts/")).expect("Failed to scan folder");
//!
//! let options = PrintOptions {
//!     price_per_sheet: 0.05,
//!     duplex: true,
//!     pages_per_sheet: 2,
//! };
//!
//! let estimate = estimate_cost(scan.total_pages, &options).expect("Failed to estimate");
//! println!("{} sheets, ${:.2}", estimate.sheets, estimate.cost);
//! ```

pub mod cost;
pub mod error;
pub mod output;
pub mod pdf;
pub mod scan;

// Re-export commonly used items
pub use error::{Error, Result};

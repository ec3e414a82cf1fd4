//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to
//! stdout as a single JSON object, replacing all human-readable output.

use serde::Serialize;

use crate::cost::CostEstimate;
use crate::scan::{FileRecord, PageOutcome, ScanResult};

/// Top-level JSON output emitted when `--json` is active
#[derive(Serialize)]
pub struct JsonReport {
    /// Sum of page counts over successfully-parsed files
    pub total_pages: usize,

    /// One entry per `.pdf` file found, in directory-listing order
    pub files: Vec<JsonFileEntry>,

    /// Cost estimate. Present only for the `cost` command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<JsonEstimate>,
}

/// A single file entry in the JSON output.
///
/// Exactly one of `pages` and `error` is present.
#[derive(Serialize)]
pub struct JsonFileEntry {
    /// File name within the scanned folder
    pub filename: String,

    /// Page count, when the file parsed as a PDF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,

    /// Error text, when it did not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sheet count and cost in the JSON output
#[derive(Serialize)]
pub struct JsonEstimate {
    /// Physical sheets of paper required
    pub sheets: u64,

    /// Cost at full precision
    pub cost: f64,

    /// Cost rounded to two decimals for display (e.g. `"$6.00"`)
    pub cost_formatted: String,
}

impl JsonReport {
    /// Build a report from a scan alone
    #[must_use]
    pub fn from_scan(scan: &ScanResult) -> Self {
        Self {
            total_pages: scan.total_pages,
            files: scan.records.iter().map(JsonFileEntry::from_record).collect(),
            estimate: None,
        }
    }

    /// Build a report from a scan plus a cost estimate
    #[must_use]
    pub fn from_scan_and_estimate(scan: &ScanResult, estimate: &CostEstimate) -> Self {
        Self {
            estimate: Some(JsonEstimate::from_estimate(estimate)),
            ..Self::from_scan(scan)
        }
    }
}

impl JsonFileEntry {
    fn from_record(record: &FileRecord) -> Self {
        let (pages, error) = match &record.outcome {
            PageOutcome::Counted(pages) => (Some(*pages), None),
            PageOutcome::Failed(message) => (None, Some(message.clone())),
        };

        Self {
            filename: record.filename.clone(),
            pages,
            error,
        }
    }
}

impl JsonEstimate {
    fn from_estimate(estimate: &CostEstimate) -> Self {
        Self {
            sheets: estimate.sheets,
            cost: estimate.cost,
            cost_formatted: format!("${:.2}", estimate.cost),
        }
    }
}

//! Printing cost estimation

use crate::error::{Error, Result};

/// Print job parameters for a cost estimate
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
    /// Price of one physical sheet of paper
    pub price_per_sheet: f64,
    /// Double-sided printing, halving the sheets needed
    pub duplex: bool,
    /// Printed pages laid out on each side of a sheet (at least 1)
    pub pages_per_sheet: u32,
}

/// Result of a cost estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostEstimate {
    /// Physical sheets of paper required
    pub sheets: u64,
    /// Estimated cost at full precision; round only for display
    pub cost: f64,
}

/// Estimate the physical sheets and cost to print `total_pages` pages.
///
/// A sheet holds `pages_per_sheet` pages per side, doubled when duplex is
/// enabled. Any partially filled sheet still consumes one physical sheet, so
/// the quotient rounds up - but an exactly-integral quotient gains no extra
/// sheet. Integer ceiling division gives both without floating point.
pub fn estimate_cost(total_pages: usize, options: &PrintOptions) -> Result<CostEstimate> {
    if options.pages_per_sheet < 1 {
        return Err(Error::InvalidInput(
            "Pages per sheet must be at least 1".to_string(),
        ));
    }

    // The comparison also rejects NaN
    if !(options.price_per_sheet >= 0.0) {
        return Err(Error::InvalidInput(
            "Price per sheet must be non-negative".to_string(),
        ));
    }

    let sides = if options.duplex { 2 } else { 1 };
    let capacity = u64::from(options.pages_per_sheet) * sides;

    let sheets = (total_pages as u64).div_ceil(capacity);
    let cost = options.price_per_sheet * sheets as f64;

    Ok(CostEstimate { sheets, cost })
}

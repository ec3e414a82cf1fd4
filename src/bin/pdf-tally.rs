//! PDF Tally CLI tool
//!
//! A command-line tool for counting pages across the PDFs in a folder and
//! estimating printing cost.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use pdf_tally::cost::{estimate_cost, CostEstimate, PrintOptions};
use pdf_tally::output::JsonReport;
use pdf_tally::pdf::read_metadata;
use pdf_tally::scan::{scan_folder, PageOutcome, ScanResult};

/// PDF Tally - Count PDF pages and estimate printing cost
#[derive(Parser)]
#[command(name = "pdf-tally")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Count pages across all PDFs in a folder
    pdf-tally scan handouts/

    # Estimate cost at $0.05 per sheet, duplex, 2 pages per side
    pdf-tally cost handouts/ --price 0.05 --duplex --pages-per-sheet 2

    # Machine-readable output
    pdf-tally scan handouts/ --json

    # Inspect a single PDF
    pdf-tally info report.pdf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count pages across all PDFs directly inside a folder
    Scan {
        /// Folder to scan (non-recursive)
        folder: PathBuf,

        /// Emit a single JSON object instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Scan a folder and estimate the cost of printing its pages
    Cost {
        /// Folder to scan (non-recursive)
        folder: PathBuf,

        /// Price of one physical sheet of paper
        #[arg(short, long)]
        price: f64,

        /// Print on both sides of each sheet
        #[arg(long)]
        duplex: bool,

        /// Pages laid out on each side of a sheet
        #[arg(long, default_value_t = 1)]
        pages_per_sheet: u32,

        /// Emit a single JSON object instead of human-readable output
        #[arg(long)]
        json: bool,
    },

    /// Show information about a single PDF file
    Info {
        /// PDF file to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan { folder, json } => cmd_scan(folder, json),
        Commands::Cost {
            folder,
            price,
            duplex,
            pages_per_sheet,
            json,
        } => cmd_cost(folder, price, duplex, pages_per_sheet, json),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Print the per-file table and total the way a human wants to read it
fn print_scan(scan: &ScanResult) {
    println!("{}", "Files:".bold());

    for record in &scan.records {
        match &record.outcome {
            PageOutcome::Counted(pages) => {
                println!("  {:<50} {:>6}", record.filename, pages);
            }
            PageOutcome::Failed(message) => {
                println!("  {:<50} {}", record.filename, message.red());
            }
        }
    }

    if scan.records.is_empty() {
        println!("  (no PDF files found)");
    }

    println!();
    println!(
        "Total pages: {}",
        scan.total_pages.to_string().green().bold()
    );

    let failures = scan.failure_count();
    if failures > 0 {
        println!(
            "{}",
            format!("{failures} file(s) could not be read and were skipped").yellow()
        );
    }
}

/// Count pages across a folder and print the breakdown
fn cmd_scan(folder: PathBuf, json: bool) -> Result<()> {
    eprintln!("Scanning {}...", folder.display());

    let scan = scan_folder(&folder)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&JsonReport::from_scan(&scan))?);
    } else {
        print_scan(&scan);
    }

    Ok(())
}

/// Scan a folder, then estimate sheets and cost
fn cmd_cost(
    folder: PathBuf,
    price: f64,
    duplex: bool,
    pages_per_sheet: u32,
    json: bool,
) -> Result<()> {
    eprintln!("Scanning {}...", folder.display());

    let scan = scan_folder(&folder)?;

    let options = PrintOptions {
        price_per_sheet: price,
        duplex,
        pages_per_sheet,
    };
    let estimate = estimate_cost(scan.total_pages, &options)?;

    if json {
        let report = JsonReport::from_scan_and_estimate(&scan, &estimate);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_scan(&scan);
        print_estimate(&estimate);
    }

    Ok(())
}

fn print_estimate(estimate: &CostEstimate) {
    println!(
        "Estimated cost: {} for {} sheets",
        format!("${:.2}", estimate.cost).green().bold(),
        estimate.sheets
    );
}

/// Show information about a PDF
fn cmd_info(input: PathBuf) -> Result<()> {
    let metadata = read_metadata(&input)?;

    println!("File: {}", input.display());
    println!("Pages: {}", metadata.page_count);

    if let Some(title) = metadata.title {
        println!("Title: {title}");
    }
    if let Some(author) = metadata.author {
        println!("Author: {author}");
    }

    Ok(())
}

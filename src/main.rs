//! # Stickerprint CLI
//!
//! Command-line interface for generating barcode stickers.
//!
//! ## Usage
//!
//! ```bash
//! # Read data.xlsx, write stickers to out/
//! stickerprint
//!
//! # Custom input and output locations
//! stickerprint --input catalog.xlsx --out stickers
//!
//! # Use a different font and four worker threads
//! stickerprint --font /usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf --jobs 4
//!
//! # Stop at the first bad row
//! stickerprint --fail-fast
//! ```

use clap::Parser;
use std::path::PathBuf;

use stickerprint::{
    StickerError,
    dispatch::{Dispatcher, prepare_output_dir},
    input, logging,
    render::font::LabelFont,
};

/// Stickerprint - Code128 product sticker generator
#[derive(Parser, Debug)]
#[command(name = "stickerprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Spreadsheet with barcode and product name columns (first sheet is used)
    #[arg(short, long, default_value = "data.xlsx")]
    input: PathBuf,

    /// Directory the PNG stickers are written to
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// TrueType/OpenType font to use instead of the embedded DejaVu Sans Bold
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Stop at the first sticker that fails
    #[arg(long)]
    fail_fast: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StickerError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if !cli.out.is_dir() {
        println!("Out folder does not exist, creating it...");
    }
    prepare_output_dir(&cli.out)?;

    let font = match &cli.font {
        Some(path) => LabelFont::from_path(path)?,
        None => LabelFont::embedded()?,
    };

    let entries = input::load_entries(&cli.input)?;

    let report = Dispatcher::new(&font, &cli.out)
        .jobs(cli.jobs)
        .fail_fast(cli.fail_fast)
        .run(&entries)?;

    for failure in &report.failures {
        eprintln!("Failed: {}", failure);
    }
    report.into_result()?;

    println!("Stickers generated!");
    Ok(())
}

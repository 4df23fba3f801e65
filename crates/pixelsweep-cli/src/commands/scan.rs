use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pixelsweep_core::io::float_image::load_float_image;
use pixelsweep_core::scan::{scan_summary, scan_with};

use crate::summary::print_scan_summary;

#[derive(Args)]
pub struct ScanArgs {
    /// Input image (OpenEXR for float data)
    pub file: PathBuf,

    /// Show the first N illegal pixels only
    #[arg(long, default_value = "20")]
    pub limit: usize,

    /// Only flag NaN and infinite values
    #[arg(long)]
    pub allow_negative: bool,

    /// TOML scan config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let config = super::load_scan_config(args.config.as_deref(), args.allow_negative)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Decoding {}", args.file.display()));

    let buffer = load_float_image(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    pb.set_message("Scanning");
    let illegal = scan_with(&buffer, &config);
    let summary = scan_summary(&buffer, &config);
    pb.finish_and_clear();

    print_scan_summary(&args.file, &buffer, &config, &summary);

    if illegal.is_empty() {
        return Ok(());
    }

    println!("{:>8}  {:>8}  {:>8}", "#", "x", "y");
    println!("{}", "-".repeat(28));
    for (i, c) in illegal.iter().take(args.limit).enumerate() {
        println!("{:>8}  {:>8}  {:>8}", i + 1, c.x, c.y);
    }
    if illegal.len() > args.limit {
        println!("... {} more", illegal.len() - args.limit);
    }

    Ok(())
}

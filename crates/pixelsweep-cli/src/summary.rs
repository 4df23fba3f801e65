use std::path::Path;

use console::Style;
use pixelsweep_core::buffer::PixelBuffer;
use pixelsweep_core::scan::{ScanConfig, ScanSummary};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    good: Style,
    bad: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green(),
            bad: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_scan_summary(
    file: &Path,
    buffer: &PixelBuffer,
    config: &ScanConfig,
    summary: &ScanSummary,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Illegal Pixel Scan"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Input"), s.path.apply_to(file.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!(
            "{}x{} ({} ch)",
            buffer.cols(),
            buffer.rows(),
            buffer.channels()
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Negatives"),
        s.value.apply_to(if config.reject_negative { "illegal" } else { "allowed" })
    );
    println!();

    if summary.is_clean() {
        println!("  {}", s.good.apply_to("No illegal pixels found"));
        println!();
        return;
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixels"),
        s.bad.apply_to(summary.illegal_pixels)
    );
    println!("  {:<14}{}", s.label.apply_to("NaN"), s.value.apply_to(summary.nan_samples));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Infinity"),
        s.value.apply_to(summary.infinite_samples)
    );
    if config.reject_negative {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Negative"),
            s.value.apply_to(summary.negative_samples)
        );
    }
    println!();
}

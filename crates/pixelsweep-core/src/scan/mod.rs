pub mod classify;
pub mod config;

pub use classify::{classify, illegal_mask, is_illegal, IllegalKind};
pub use config::ScanConfig;

use rayon::prelude::*;
use tracing::debug;

use crate::buffer::{Coordinate, PixelBuffer};
use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Illegal pixel coordinates in row-major order: rows ascending, then columns.
pub type ScanResult = Vec<Coordinate>;

/// Find every pixel with at least one NaN, infinite or negative channel.
pub fn scan(buffer: &PixelBuffer) -> ScanResult {
    scan_with(buffer, &ScanConfig::default())
}

/// Find every pixel with at least one illegal channel under `config`.
///
/// Each pixel contributes at most one coordinate. Degenerate buffers yield an
/// empty result.
pub fn scan_with(buffer: &PixelBuffer, config: &ScanConfig) -> ScanResult {
    if buffer.is_degenerate() {
        return Vec::new();
    }

    let mask = illegal_mask(buffer, config);
    let result: ScanResult = mask
        .indexed_iter()
        .filter(|&(_, &flagged)| flagged)
        .map(|((row, col), _)| Coordinate::from_row_col(row, col))
        .collect();

    debug!(
        rows = buffer.rows(),
        cols = buffer.cols(),
        channels = buffer.channels(),
        illegal = result.len(),
        "Scan complete"
    );
    result
}

/// Counts of illegal samples in a buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Pixels with at least one illegal channel.
    pub illegal_pixels: usize,
    pub nan_samples: usize,
    pub infinite_samples: usize,
    pub negative_samples: usize,
}

impl ScanSummary {
    pub fn illegal_samples(&self) -> usize {
        self.nan_samples + self.infinite_samples + self.negative_samples
    }

    pub fn is_clean(&self) -> bool {
        self.illegal_pixels == 0
    }

    fn merge(self, other: ScanSummary) -> ScanSummary {
        ScanSummary {
            illegal_pixels: self.illegal_pixels + other.illegal_pixels,
            nan_samples: self.nan_samples + other.nan_samples,
            infinite_samples: self.infinite_samples + other.infinite_samples,
            negative_samples: self.negative_samples + other.negative_samples,
        }
    }
}

/// Tally illegal samples by kind, alongside the illegal pixel count.
pub fn scan_summary(buffer: &PixelBuffer, config: &ScanConfig) -> ScanSummary {
    if buffer.is_degenerate() {
        return ScanSummary::default();
    }

    let tally = |mut acc: ScanSummary, v: f32| {
        match classify(v, config) {
            Some(IllegalKind::Nan) => acc.nan_samples += 1,
            Some(IllegalKind::Infinite) => acc.infinite_samples += 1,
            Some(IllegalKind::Negative) => acc.negative_samples += 1,
            None => {}
        }
        acc
    };

    let large = buffer.rows() * buffer.cols() >= PARALLEL_PIXEL_THRESHOLD;
    let mut summary = match buffer.data.as_slice_memory_order() {
        Some(samples) if large => samples
            .par_iter()
            .fold(ScanSummary::default, |acc, &v| tally(acc, v))
            .reduce(ScanSummary::default, ScanSummary::merge),
        _ => buffer.data.iter().fold(ScanSummary::default(), |acc, &v| tally(acc, v)),
    };

    summary.illegal_pixels = illegal_mask(buffer, config)
        .iter()
        .filter(|&&flagged| flagged)
        .count();
    summary
}

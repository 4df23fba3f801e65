use ndarray::{Array2, ArrayView1, Axis, Zip};

use crate::buffer::PixelBuffer;
use crate::consts::PARALLEL_PIXEL_THRESHOLD;

use super::config::ScanConfig;

/// Why a sample value is illegal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalKind {
    Nan,
    Infinite,
    Negative,
}

impl std::fmt::Display for IllegalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalKind::Nan => write!(f, "NaN"),
            IllegalKind::Infinite => write!(f, "Infinity"),
            IllegalKind::Negative => write!(f, "Negative"),
        }
    }
}

/// Classify a single sample. `None` means the value is legal.
///
/// `-0.0` compares equal to zero and is not treated as negative.
pub fn classify(value: f32, config: &ScanConfig) -> Option<IllegalKind> {
    if value.is_nan() {
        Some(IllegalKind::Nan)
    } else if value.is_infinite() {
        Some(IllegalKind::Infinite)
    } else if config.reject_negative && value < 0.0 {
        Some(IllegalKind::Negative)
    } else {
        None
    }
}

pub fn is_illegal(value: f32, config: &ScanConfig) -> bool {
    // `!(v >= 0.0)` is true for NaN, so the negative rule also covers NaN.
    if config.reject_negative {
        !(value >= 0.0) || value == f32::INFINITY
    } else {
        !value.is_finite()
    }
}

fn pixel_is_illegal(pixel: ArrayView1<'_, f32>, config: &ScanConfig) -> bool {
    pixel.iter().any(|&v| is_illegal(v, config))
}

/// Per-pixel illegal mask, shape = (rows, cols).
///
/// One bulk pass over the channel lanes. Large images are classified in
/// parallel; the mask layout is independent of the evaluation order.
pub fn illegal_mask(buffer: &PixelBuffer, config: &ScanConfig) -> Array2<bool> {
    let lanes = buffer.data.lanes(Axis(2));
    let zip = Zip::from(lanes);

    if buffer.rows() * buffer.cols() >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_map_collect(|pixel| pixel_is_illegal(pixel, config))
    } else {
        zip.map_collect(|pixel| pixel_is_illegal(pixel, config))
    }
}

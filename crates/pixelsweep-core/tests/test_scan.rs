mod common;

use ndarray::Array3;

use common::{coords, filled, mono};
use pixelsweep_core::buffer::{Coordinate, PixelBuffer};
use pixelsweep_core::scan::{
    classify, illegal_mask, is_illegal, scan, scan_summary, scan_with, IllegalKind, ScanConfig,
};

const NAN: f32 = f32::NAN;
const INF: f32 = f32::INFINITY;

// ---------------------------------------------------------------------------
// classify / is_illegal
// ---------------------------------------------------------------------------

#[test]
fn test_classify_kinds() {
    let config = ScanConfig::default();
    assert_eq!(classify(NAN, &config), Some(IllegalKind::Nan));
    assert_eq!(classify(INF, &config), Some(IllegalKind::Infinite));
    assert_eq!(classify(-INF, &config), Some(IllegalKind::Infinite));
    assert_eq!(classify(-0.5, &config), Some(IllegalKind::Negative));
    assert_eq!(classify(0.0, &config), None);
    assert_eq!(classify(1.0e30, &config), None);
}

#[test]
fn test_negative_zero_is_legal() {
    let config = ScanConfig::default();
    assert_eq!(classify(-0.0, &config), None);
    assert!(!is_illegal(-0.0, &config));
}

#[test]
fn test_is_illegal_agrees_with_classify() {
    let values = [NAN, INF, -INF, -1.0, -f32::MIN_POSITIVE, -0.0, 0.0, 0.25, f32::MAX];
    for config in [ScanConfig::default(), ScanConfig::non_finite_only()] {
        for &v in &values {
            assert_eq!(
                is_illegal(v, &config),
                classify(v, &config).is_some(),
                "value {v} reject_negative={}",
                config.reject_negative
            );
        }
    }
}

#[test]
fn test_non_finite_only_allows_negatives() {
    let config = ScanConfig::non_finite_only();
    assert_eq!(classify(-3.0, &config), None);
    assert_eq!(classify(-INF, &config), Some(IllegalKind::Infinite));
    assert_eq!(classify(NAN, &config), Some(IllegalKind::Nan));
}

// ---------------------------------------------------------------------------
// scan
// ---------------------------------------------------------------------------

#[test]
fn test_scan_two_by_two_example() {
    let buffer = mono(&[&[0.5, NAN], &[-1.0, 2.0]]);
    assert_eq!(scan(&buffer), coords(&[(1, 0), (0, 1)]));
}

#[test]
fn test_scan_clean_buffer_is_empty() {
    let buffer = filled(16, 16, 4, 0.25);
    assert!(scan(&buffer).is_empty());
}

#[test]
fn test_scan_degenerate_buffers() {
    assert!(scan(&filled(0, 0, 1, 0.0)).is_empty());
    assert!(scan(&filled(0, 5, 3, 0.0)).is_empty());
    assert!(scan(&filled(5, 0, 3, 0.0)).is_empty());
    assert!(scan(&PixelBuffer::new(Array3::zeros((3, 3, 0)))).is_empty());
}

#[test]
fn test_scan_one_entry_per_pixel() {
    let mut buffer = filled(2, 3, 4, 1.0);
    buffer.data[[1, 2, 0]] = NAN;
    buffer.data[[1, 2, 1]] = INF;
    buffer.data[[1, 2, 3]] = -2.0;
    assert_eq!(scan(&buffer), coords(&[(2, 1)]));
}

#[test]
fn test_scan_any_channel_flags_pixel() {
    let mut buffer = filled(1, 4, 3, 0.5);
    buffer.data[[0, 0, 0]] = NAN;
    buffer.data[[0, 1, 1]] = -INF;
    buffer.data[[0, 3, 2]] = -0.001;
    assert_eq!(scan(&buffer), coords(&[(0, 0), (1, 0), (3, 0)]));
}

#[test]
fn test_scan_row_major_order() {
    let mut buffer = filled(4, 4, 1, 0.0);
    for &(row, col) in &[(3, 0), (0, 3), (2, 2), (0, 1), (3, 3)] {
        buffer.data[[row, col, 0]] = NAN;
    }
    let result = scan(&buffer);
    assert_eq!(result, coords(&[(1, 0), (3, 0), (2, 2), (0, 3), (3, 3)]));

    for pair in result.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.y < b.y || (a.y == b.y && a.x < b.x));
    }
}

#[test]
fn test_scan_with_respects_config() {
    let buffer = mono(&[&[-1.0, NAN], &[0.0, -0.0]]);
    assert_eq!(scan_with(&buffer, &ScanConfig::default()), coords(&[(0, 0), (1, 0)]));
    assert_eq!(scan_with(&buffer, &ScanConfig::non_finite_only()), coords(&[(1, 0)]));
}

#[test]
fn test_scan_is_deterministic() {
    let mut buffer = filled(32, 32, 2, 1.0);
    for i in 0..32 {
        buffer.data[[i, (i * 7) % 32, i % 2]] = if i % 3 == 0 { NAN } else { -1.0 };
    }
    assert_eq!(scan(&buffer), scan(&buffer));
}

#[test]
fn test_scan_completeness() {
    let (h, w, c) = (9, 13, 3);
    let mut buffer = filled(h, w, c, 0.75);
    for row in 0..h {
        for col in 0..w {
            match (row * w + col) % 11 {
                0 => buffer.data[[row, col, 0]] = NAN,
                4 => buffer.data[[row, col, 1]] = INF,
                7 => buffer.data[[row, col, 2]] = -0.5,
                _ => {}
            }
        }
    }
    let result = scan(&buffer);

    for row in 0..h {
        for col in 0..w {
            let expected = buffer.pixel(row, col).iter().any(|v| !v.is_finite() || *v < 0.0);
            let present = result.contains(&Coordinate::new(col, row));
            assert_eq!(expected, present, "pixel row={row} col={col}");
        }
    }
}

#[test]
fn test_parallel_scan_matches_sequential_order() {
    // 300x300 crosses the parallel threshold.
    let (h, w) = (300, 300);
    let mut buffer = filled(h, w, 1, 0.1);
    let mut expected = Vec::new();
    for row in 0..h {
        for col in 0..w {
            if (row * 31 + col * 17) % 97 == 0 {
                buffer.data[[row, col, 0]] = if col % 2 == 0 { NAN } else { -4.0 };
                expected.push(Coordinate::new(col, row));
            }
        }
    }
    assert_eq!(scan(&buffer), expected);
}

// ---------------------------------------------------------------------------
// illegal_mask / scan_summary
// ---------------------------------------------------------------------------

#[test]
fn test_illegal_mask_shape() {
    let buffer = mono(&[&[0.5, NAN, 1.0], &[-1.0, 2.0, 3.0]]);
    let mask = illegal_mask(&buffer, &ScanConfig::default());
    assert_eq!(mask.dim(), (2, 3));
    assert!(mask[[0, 1]]);
    assert!(mask[[1, 0]]);
    assert_eq!(mask.iter().filter(|&&f| f).count(), 2);
}

#[test]
fn test_scan_summary_counts_samples_and_pixels() {
    let mut buffer = filled(2, 2, 3, 0.5);
    buffer.data[[0, 0, 0]] = NAN;
    buffer.data[[0, 0, 1]] = NAN;
    buffer.data[[0, 1, 2]] = -INF;
    buffer.data[[1, 1, 0]] = -1.0;

    let summary = scan_summary(&buffer, &ScanConfig::default());
    assert_eq!(summary.illegal_pixels, 3);
    assert_eq!(summary.nan_samples, 2);
    assert_eq!(summary.infinite_samples, 1);
    assert_eq!(summary.negative_samples, 1);
    assert_eq!(summary.illegal_samples(), 4);
    assert!(!summary.is_clean());

    let relaxed = scan_summary(&buffer, &ScanConfig::non_finite_only());
    assert_eq!(relaxed.illegal_pixels, 2);
    assert_eq!(relaxed.negative_samples, 0);
}

#[test]
fn test_scan_summary_large_buffer() {
    // 300x300 crosses the parallel threshold.
    let mut buffer = filled(300, 300, 2, 0.5);
    for i in 0..300 {
        buffer.data[[i, i, 0]] = NAN;
        buffer.data[[i, 299 - i, 1]] = -1.0;
    }
    buffer.data[[0, 1, 1]] = INF;

    let summary = scan_summary(&buffer, &ScanConfig::default());
    assert_eq!(summary.nan_samples, 300);
    assert_eq!(summary.negative_samples, 300);
    assert_eq!(summary.infinite_samples, 1);
    // Diagonals never cross on an even-sized grid; (0, 1) is new.
    assert_eq!(summary.illegal_pixels, 601);
    assert_eq!(summary.illegal_pixels, scan(&buffer).len());
}

#[test]
fn test_scan_summary_clean() {
    let summary = scan_summary(&filled(4, 4, 1, 0.0), &ScanConfig::default());
    assert!(summary.is_clean());
    assert_eq!(summary.illegal_samples(), 0);
}

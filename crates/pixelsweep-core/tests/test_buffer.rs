use ndarray::Array3;

use pixelsweep_core::buffer::{Coordinate, PixelBuffer};
use pixelsweep_core::error::PixelsweepError;

#[test]
fn test_from_interleaved_layout() {
    let samples: Vec<f32> = (0..12).map(|v| v as f32).collect();
    let buffer = PixelBuffer::from_interleaved(2, 3, 2, samples).unwrap();
    assert_eq!((buffer.rows(), buffer.cols(), buffer.channels()), (2, 3, 2));
    // row 1, col 2 starts at (1 * 3 + 2) * 2 = 10
    assert_eq!(buffer.pixel(1, 2).to_vec(), vec![10.0, 11.0]);
}

#[test]
fn test_from_interleaved_shape_mismatch() {
    let result = PixelBuffer::from_interleaved(2, 2, 3, vec![0.0; 11]);
    assert!(matches!(
        result,
        Err(PixelsweepError::InvalidDimensions { len: 11, .. })
    ));
}

#[test]
fn test_degenerate() {
    assert!(PixelBuffer::new(Array3::zeros((0, 4, 1))).is_degenerate());
    assert!(PixelBuffer::new(Array3::zeros((4, 4, 0))).is_degenerate());
    assert!(!PixelBuffer::new(Array3::zeros((1, 1, 1))).is_degenerate());
}

#[test]
fn test_coordinate_from_row_col_swaps() {
    let c = Coordinate::from_row_col(3, 8);
    assert_eq!(c, Coordinate::new(8, 3));
    assert_eq!(c.to_string(), "(8, 3)");
}

use ndarray::{Array3, ArrayView1};

use crate::error::{PixelsweepError, Result};

/// A decoded floating-point texture.
/// Samples keep their full dynamic range: NaN, infinities and negatives survive.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    /// Sample data, shape = (rows, cols, channels)
    pub data: Array3<f32>,
}

impl PixelBuffer {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Build a buffer from interleaved row-major samples.
    pub fn from_interleaved(
        rows: usize,
        cols: usize,
        channels: usize,
        samples: Vec<f32>,
    ) -> Result<Self> {
        let len = samples.len();
        let data = Array3::from_shape_vec((rows, cols, channels), samples).map_err(|_| {
            PixelsweepError::InvalidDimensions {
                rows,
                cols,
                channels,
                len,
            }
        })?;
        Ok(Self { data })
    }

    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// True when the buffer holds no samples at all.
    pub fn is_degenerate(&self) -> bool {
        self.data.is_empty()
    }

    /// Channel values of the pixel at (row, col).
    pub fn pixel(&self, row: usize, col: usize) -> ArrayView1<'_, f32> {
        self.data.slice(ndarray::s![row, col, ..])
    }
}

/// A pixel location in viewer convention: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Map a buffer index `[row][col]` to viewer coordinates.
    pub fn from_row_col(row: usize, col: usize) -> Self {
        Self { x: col, y: row }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelsweepError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("OpenEXR error: {0}")]
    Exr(#[from] exr::error::Error),

    #[error("Invalid buffer shape: {rows}x{cols}x{channels} does not hold {len} samples")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        channels: usize,
        len: usize,
    },

    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    #[error("Texture export failed: {0}")]
    Export(String),

    #[error("Replay thread is no longer running")]
    ReplayClosed,
}

pub type Result<T> = std::result::Result<T, PixelsweepError>;

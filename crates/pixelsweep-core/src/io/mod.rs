pub mod export;
pub mod float_image;

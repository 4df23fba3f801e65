use std::fs::File;
use std::io::Read;
use std::path::Path;

use exr::prelude::{read_first_flat_layer_from_file, AnyChannel, FlatSamples};
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Rgb, Rgba};
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::{PixelsweepError, Result};

/// First four bytes of every OpenEXR file.
const EXR_MAGIC: [u8; 4] = [0x76, 0x2f, 0x31, 0x01];

/// Decode an image file into a float buffer without clamping or tone mapping.
///
/// OpenEXR files are read with every channel of their first layer, so
/// single-channel (R, Y, Z) and two-channel exports decode as-is; NaN,
/// infinities and negatives survive, half floats are widened to f32. Other
/// formats go through `image`, are normalized to [0.0, 1.0] and keep their
/// own channel count.
pub fn load_float_image(path: &Path) -> Result<PixelBuffer> {
    if is_openexr(path)? {
        return load_exr(path);
    }
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    to_pixel_buffer(img)
}

fn is_openexr(path: &Path) -> Result<bool> {
    let mut magic = [0u8; 4];
    let mut file = File::open(path)?;
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == EXR_MAGIC),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Sort key placing R, G, B, A first; other channels keep file order.
fn channel_rank(channel: &AnyChannel<FlatSamples>) -> usize {
    let name = channel.name.to_string();
    match name.rsplit('.').next().unwrap_or(&name) {
        "R" => 0,
        "G" => 1,
        "B" => 2,
        "A" => 3,
        _ => 4,
    }
}

/// Decode the first layer of an OpenEXR file, interleaving all its channels.
pub fn load_exr(path: &Path) -> Result<PixelBuffer> {
    let image = read_first_flat_layer_from_file(path)?;
    let layer = image.layer_data;
    let (w, h) = (layer.size.0, layer.size.1);

    let mut channels: Vec<&AnyChannel<FlatSamples>> = layer.channel_data.list.iter().collect();
    channels.sort_by_key(|c| channel_rank(c));

    let n = channels.len();
    let mut samples = vec![0.0f32; h * w * n];
    for (ci, channel) in channels.iter().enumerate() {
        if channel.sampling.0 != 1 || channel.sampling.1 != 1 {
            return Err(PixelsweepError::UnsupportedFormat(format!(
                "subsampled channel {}",
                channel.name
            )));
        }
        for (i, v) in channel.sample_data.values_as_f32().take(h * w).enumerate() {
            samples[i * n + ci] = v;
        }
    }

    debug!(
        width = w,
        height = h,
        channels = n,
        "Decoded OpenEXR layer"
    );
    PixelBuffer::from_interleaved(h, w, n, samples)
}

/// Convert a decoded image to a (rows, cols, channels) buffer.
pub fn to_pixel_buffer(img: DynamicImage) -> Result<PixelBuffer> {
    let (w, h) = (img.width() as usize, img.height() as usize);

    match img {
        DynamicImage::ImageRgb32F(buf) => PixelBuffer::from_interleaved(h, w, 3, buf.into_raw()),
        DynamicImage::ImageRgba32F(buf) => PixelBuffer::from_interleaved(h, w, 4, buf.into_raw()),
        other => {
            // Pick the source channels back out of the widened RGBA layout.
            let keep: &[usize] = match other.color().channel_count() {
                1 => &[0],
                2 => &[0, 3],
                3 => &[0, 1, 2],
                4 => &[0, 1, 2, 3],
                n => {
                    return Err(PixelsweepError::UnsupportedFormat(format!(
                        "{n}-channel image"
                    )))
                }
            };
            let rgba = other.to_rgba32f();
            let mut samples = Vec::with_capacity(h * w * keep.len());
            for pixel in rgba.pixels() {
                samples.extend(keep.iter().map(|&c| pixel.0[c]));
            }
            PixelBuffer::from_interleaved(h, w, keep.len(), samples)
        }
    }
}

/// Save a buffer as 32-bit float OpenEXR.
///
/// One- and two-channel buffers are widened to RGB (mono is replicated, the
/// missing blue channel of a two-channel buffer is zero).
pub fn save_exr(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let (h, w, c) = buffer.data.dim();
    let shape_error = || PixelsweepError::InvalidDimensions {
        rows: h,
        cols: w,
        channels: c,
        len: buffer.data.len(),
    };
    let width = u32::try_from(w).map_err(|_| shape_error())?;
    let height = u32::try_from(h).map_err(|_| shape_error())?;

    match c {
        4 => {
            let samples: Vec<f32> = buffer.data.iter().copied().collect();
            let img = ImageBuffer::<Rgba<f32>, Vec<f32>>::from_raw(width, height, samples)
                .ok_or_else(shape_error)?;
            img.save_with_format(path, ImageFormat::OpenExr)?;
        }
        1..=3 => {
            let mut samples = Vec::with_capacity(h * w * 3);
            for pixel in buffer.data.lanes(ndarray::Axis(2)) {
                let rgb = match c {
                    1 => [pixel[0], pixel[0], pixel[0]],
                    2 => [pixel[0], pixel[1], 0.0],
                    _ => [pixel[0], pixel[1], pixel[2]],
                };
                samples.extend_from_slice(&rgb);
            }
            let img = ImageBuffer::<Rgb<f32>, Vec<f32>>::from_raw(width, height, samples)
                .ok_or_else(shape_error)?;
            img.save_with_format(path, ImageFormat::OpenExr)?;
        }
        n => {
            return Err(PixelsweepError::UnsupportedFormat(format!(
                "cannot write {n}-channel buffer as OpenEXR"
            )))
        }
    }
    Ok(())
}

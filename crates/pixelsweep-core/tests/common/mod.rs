#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pixelsweep_core::buffer::{Coordinate, PixelBuffer};
use pixelsweep_core::error::{PixelsweepError, Result};
use pixelsweep_core::host::{IdentitySource, LocationSink, TextureExporter, TextureSave};
use pixelsweep_core::identity::ImageIdentity;
use pixelsweep_core::io::float_image::save_exr;

/// Build a single-channel buffer from nested rows.
pub fn mono(rows: &[&[f32]]) -> PixelBuffer {
    let h = rows.len();
    let w = rows.first().map_or(0, |r| r.len());
    let samples: Vec<f32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    PixelBuffer::from_interleaved(h, w, 1, samples).expect("rows have equal length")
}

/// Buffer of `h`x`w`x`c` filled with `fill`.
pub fn filled(h: usize, w: usize, c: usize, fill: f32) -> PixelBuffer {
    PixelBuffer::from_interleaved(h, w, c, vec![fill; h * w * c]).expect("shape matches")
}

pub fn coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
    pairs.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
}

/// Exporter writing in-memory buffers as EXR and counting exports.
pub struct FakeExporter {
    pub textures: HashMap<i64, PixelBuffer>,
    pub exports: Arc<AtomicUsize>,
}

impl FakeExporter {
    pub fn new(textures: Vec<(i64, PixelBuffer)>) -> (Self, Arc<AtomicUsize>) {
        let exports = Arc::new(AtomicUsize::new(0));
        let exporter = Self {
            textures: textures.into_iter().collect(),
            exports: Arc::clone(&exports),
        };
        (exporter, exports)
    }
}

impl TextureExporter for FakeExporter {
    fn save_texture(&mut self, request: &TextureSave, dest: &Path) -> Result<()> {
        self.exports.fetch_add(1, Ordering::SeqCst);
        let buffer = self.textures.get(&request.resource_id).ok_or_else(|| {
            PixelsweepError::Export(format!("unknown resource {}", request.resource_id))
        })?;
        save_exr(buffer, dest)
    }
}

/// Viewer recording every location it was sent to.
pub struct FakeViewer {
    pub identity: ImageIdentity,
    pub visited: Vec<(usize, usize)>,
}

impl FakeViewer {
    pub fn showing(event_id: i64, resource_id: i64) -> Self {
        Self {
            identity: ImageIdentity::new(event_id, resource_id),
            visited: Vec::new(),
        }
    }
}

impl IdentitySource for FakeViewer {
    fn current_identity(&self) -> ImageIdentity {
        self.identity
    }
}

impl LocationSink for FakeViewer {
    fn goto_location(&mut self, x: usize, y: usize) {
        self.visited.push((x, y));
    }
}

/// Number of entries in a directory.
pub fn dir_entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).expect("read dir").count()
}

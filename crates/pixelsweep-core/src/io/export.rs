use std::path::Path;

use tempfile::TempPath;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::consts::{EXPORT_PREFIX, EXPORT_SUFFIX};
use crate::error::Result;

use super::float_image::load_float_image;

/// A temporary export destination that is deleted when dropped.
///
/// The file is removed on every exit path, including early returns and
/// unwinding, so no export outlives the call that created it.
pub struct ScopedExport {
    path: TempPath,
}

impl ScopedExport {
    /// Reserve a fresh `.exr` path in the system temp directory.
    pub fn create() -> Result<Self> {
        Self::create_in(&std::env::temp_dir())
    }

    pub fn create_in(dir: &Path) -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix(EXPORT_PREFIX)
            .suffix(EXPORT_SUFFIX)
            .tempfile_in(dir)?;
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode whatever the exporter wrote to this path.
    pub fn decode(&self) -> Result<PixelBuffer> {
        load_float_image(self.path())
    }
}

/// Export to a scoped temp file, decode it, and delete the file.
///
/// `export` receives the destination path and must write a float image there.
pub fn fetch_via_export<F>(dir: Option<&Path>, export: F) -> Result<PixelBuffer>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let scoped = match dir {
        Some(dir) => ScopedExport::create_in(dir)?,
        None => ScopedExport::create()?,
    };
    debug!(path = %scoped.path().display(), "Exporting texture");

    export(scoped.path())?;
    scoped.decode()
}

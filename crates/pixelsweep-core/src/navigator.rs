use tracing::{debug, info};

use crate::buffer::{Coordinate, PixelBuffer};
use crate::error::Result;
use crate::identity::ImageIdentity;
use crate::scan::{scan_with, ScanConfig, ScanResult};

/// Session state for stepping through the illegal pixels of the viewed image.
///
/// The scan result is cached per [`ImageIdentity`]. A call with the same
/// identity never refetches; a call with a new identity fetches and rescans
/// exactly once. After the last coordinate the cursor wraps to the first.
#[derive(Debug)]
pub struct Navigator {
    config: ScanConfig,
    /// Identity the cache was computed for; `None` until a scan succeeds.
    last_identity: Option<ImageIdentity>,
    cached: ScanResult,
    /// Index of the last reported coordinate; `None` before the first.
    cursor: Option<usize>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            last_identity: None,
            cached: Vec::new(),
            cursor: None,
        }
    }

    /// Report the next illegal pixel of the image identified by `current`.
    ///
    /// `fetch` is called only when `current` differs from the identity of the
    /// cached result. If it fails the error is returned and the navigator stays
    /// stale, so the next call fetches again. `Ok(None)` means the image has no
    /// illegal pixels.
    pub fn advance<F>(&mut self, current: ImageIdentity, fetch: F) -> Result<Option<Coordinate>>
    where
        F: FnOnce() -> Result<PixelBuffer>,
    {
        if self.last_identity != Some(current) {
            self.last_identity = None;
            self.cached.clear();
            self.cursor = None;

            let buffer = fetch()?;
            self.cached = scan_with(&buffer, &self.config);
            drop(buffer);

            self.last_identity = Some(current);
            info!(
                identity = %current,
                illegal = self.cached.len(),
                "Rescanned image"
            );
        }

        if self.cached.is_empty() {
            return Ok(None);
        }

        let next = match self.cursor {
            Some(i) => (i + 1) % self.cached.len(),
            None => 0,
        };
        self.cursor = Some(next);
        debug!(index = next, total = self.cached.len(), "Advanced cursor");
        Ok(Some(self.cached[next]))
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn last_identity(&self) -> Option<ImageIdentity> {
        self.last_identity
    }

    /// Cached coordinates for [`Self::last_identity`].
    pub fn results(&self) -> &[Coordinate] {
        &self.cached
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// True when the cache already holds the scan for `identity`.
    pub fn is_fresh_for(&self, identity: ImageIdentity) -> bool {
        self.last_identity == Some(identity)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

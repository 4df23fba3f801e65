use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{error, info, warn};

use crate::buffer::Coordinate;
use crate::consts::MENU_PATH;
use crate::error::Result;
use crate::host::{
    IdentitySource, LocationSink, MenuCallback, PanelMenu, TextureExporter, TextureSave,
};
use crate::io::export::fetch_via_export;
use crate::navigator::Navigator;
use crate::replay::ReplayThread;
use crate::scan::ScanConfig;

/// The "Find Illegal Pixel" texture viewer command.
///
/// Each activation jumps the viewer to the next illegal pixel of the
/// displayed texture. The texture is exported on the replay owner thread only
/// when the viewed event or resource changed since the previous activation.
pub struct FindIllegalPixel<C> {
    navigator: Navigator,
    replay: ReplayThread<C>,
    export_dir: Option<PathBuf>,
}

impl<C: TextureExporter + Send + 'static> FindIllegalPixel<C> {
    pub fn new(replay: ReplayThread<C>) -> Self {
        Self::with_config(replay, ScanConfig::default())
    }

    pub fn with_config(replay: ReplayThread<C>, config: ScanConfig) -> Self {
        Self {
            navigator: Navigator::with_config(config),
            replay,
            export_dir: None,
        }
    }

    /// Write temporary exports to `dir` instead of the system temp directory.
    pub fn export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = Some(dir.into());
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Run one step: find the next illegal pixel and move the viewer there.
    ///
    /// Returns the coordinate the viewer was sent to, or `None` when the
    /// texture has no illegal pixels.
    pub fn activate<V>(&mut self, viewer: &mut V) -> Result<Option<Coordinate>>
    where
        V: IdentitySource + LocationSink,
    {
        let identity = viewer.current_identity();
        let request = TextureSave::for_resource(identity.resource_id);
        let replay = &self.replay;
        let dir = self.export_dir.as_deref();

        let found = self.navigator.advance(identity, || {
            fetch_via_export(dir, |dest| {
                let dest = dest.to_path_buf();
                replay.block_invoke(move |controller| controller.save_texture(&request, &dest))?
            })
        })?;

        match found {
            Some(c) => {
                viewer.goto_location(c.x, c.y);
                info!(x = c.x, y = c.y, "Illegal pixel found");
            }
            None => warn!(identity = %identity, "No illegal pixel found"),
        }
        Ok(found)
    }

    /// Bind the command and a viewer into a menu callback.
    ///
    /// Failures are logged; the next activation retries the export.
    pub fn into_menu_callback<V>(self, viewer: Rc<RefCell<V>>) -> MenuCallback
    where
        V: IdentitySource + LocationSink + 'static,
    {
        let mut command = self;
        Box::new(move || {
            if let Err(e) = command.activate(&mut *viewer.borrow_mut()) {
                error!(error = %e, "Find Illegal Pixel failed");
            }
        })
    }
}

/// Attach `callback` to the texture viewer panel menu.
pub fn register<M: PanelMenu>(version: &str, menu: &mut M, callback: MenuCallback) {
    info!(version, "Registering 'Find Illegal Pixel' extension");
    menu.register_panel_menu(&MENU_PATH, callback);
}

pub fn unregister<M: PanelMenu>(menu: &mut M) {
    info!("Unregistering 'Find Illegal Pixel' extension");
    menu.unregister_panel_menu(&MENU_PATH);
}

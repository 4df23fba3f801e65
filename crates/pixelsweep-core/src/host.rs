//! Interfaces of the capture tool hosting the command.

use std::path::Path;

use crate::error::Result;
use crate::identity::ImageIdentity;

/// Reports which event and resource the texture viewer is showing.
pub trait IdentitySource {
    /// Must be side-effect free; queried once per activation.
    fn current_identity(&self) -> ImageIdentity;
}

/// Receives "center the view here" commands.
pub trait LocationSink {
    fn goto_location(&mut self, x: usize, y: usize);
}

/// File format of a texture export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// 32-bit float OpenEXR; keeps full range, no clamping or tone mapping.
    #[default]
    Exr,
}

/// What to export: one mip of one slice of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureSave {
    pub resource_id: i64,
    pub mip: u32,
    pub slice: u32,
    pub format: ExportFormat,
}

impl TextureSave {
    /// Top mip, first slice, OpenEXR.
    pub fn for_resource(resource_id: i64) -> Self {
        Self {
            resource_id,
            mip: 0,
            slice: 0,
            format: ExportFormat::Exr,
        }
    }
}

/// Replay controller capable of writing a texture to disk.
pub trait TextureExporter {
    fn save_texture(&mut self, request: &TextureSave, dest: &Path) -> Result<()>;
}

pub type MenuCallback = Box<dyn FnMut()>;

/// Host panel menu that commands attach to.
pub trait PanelMenu {
    fn register_panel_menu(&mut self, path: &[&str], callback: MenuCallback);
    fn unregister_panel_menu(&mut self, path: &[&str]);
}

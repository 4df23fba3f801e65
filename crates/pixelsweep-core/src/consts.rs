/// Minimum pixel count (rows*cols) to classify rows in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// File suffix given to temporary texture exports.
pub const EXPORT_SUFFIX: &str = ".exr";

/// Prefix given to temporary texture exports.
pub const EXPORT_PREFIX: &str = "pixelsweep-";

/// Menu path under which the texture viewer command is registered.
pub const MENU_PATH: [&str; 1] = ["Find Illegal Pixel"];

/// Thread name of the replay owner thread.
pub const REPLAY_THREAD_NAME: &str = "pixelsweep-replay";

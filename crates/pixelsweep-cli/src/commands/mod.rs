pub mod config;
pub mod scan;
pub mod walk;

use std::path::Path;

use anyhow::{Context, Result};
use pixelsweep_core::scan::ScanConfig;

/// Load a TOML scan config, falling back to the defaults.
pub fn load_scan_config(path: Option<&Path>, allow_negative: bool) -> Result<ScanConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str::<ScanConfig>(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => ScanConfig::default(),
    };
    if allow_negative {
        config.reject_negative = false;
    }
    Ok(config)
}

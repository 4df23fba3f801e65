use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use pixelsweep_core::error::PixelsweepError;
use pixelsweep_core::extension::FindIllegalPixel;
use pixelsweep_core::host::{IdentitySource, LocationSink, TextureExporter, TextureSave};
use pixelsweep_core::identity::ImageIdentity;
use pixelsweep_core::io::float_image::{load_float_image, save_exr};
use pixelsweep_core::replay::ReplayThread;
use tracing::debug;

#[derive(Args)]
pub struct WalkArgs {
    /// Images to step through; each file is one resource
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only flag NaN and infinite values
    #[arg(long)]
    pub allow_negative: bool,

    /// TOML scan config
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Replay controller backed by image files on disk.
struct FileCapture {
    resources: Vec<PathBuf>,
}

impl TextureExporter for FileCapture {
    fn save_texture(
        &mut self,
        request: &TextureSave,
        dest: &Path,
    ) -> pixelsweep_core::error::Result<()> {
        let source = usize::try_from(request.resource_id)
            .ok()
            .and_then(|i| self.resources.get(i))
            .ok_or_else(|| {
                PixelsweepError::Export(format!("unknown resource {}", request.resource_id))
            })?;
        let buffer = load_float_image(source)?;
        save_exr(&buffer, dest)
    }
}

/// Terminal stand-in for the texture viewer.
struct TerminalViewer {
    event_id: i64,
    resource_id: i64,
}

impl IdentitySource for TerminalViewer {
    fn current_identity(&self) -> ImageIdentity {
        ImageIdentity::new(self.event_id, self.resource_id)
    }
}

impl LocationSink for TerminalViewer {
    fn goto_location(&mut self, x: usize, y: usize) {
        println!("  {} ({}, {})", style("\u{2192}").cyan(), x, y);
    }
}

fn print_help(files: &[PathBuf]) {
    println!("Resources:");
    for (i, f) in files.iter().enumerate() {
        println!("  [{}] {}", i, f.display());
    }
    println!("Commands: <enter> next pixel, r <n> select resource, e new event, q quit");
}

pub fn run(args: &WalkArgs) -> Result<()> {
    let config = super::load_scan_config(args.config.as_deref(), args.allow_negative)?;
    for f in &args.files {
        if !f.exists() {
            bail!("File not found: {}", f.display());
        }
    }

    let replay = ReplayThread::spawn(FileCapture {
        resources: args.files.clone(),
    })?;
    let mut command = FindIllegalPixel::with_config(replay, config);
    let mut viewer = TerminalViewer {
        event_id: 0,
        resource_id: 0,
    };

    print_help(&args.files);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("[{}]> ", viewer.resource_id);
        std::io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let mut words = line.split_whitespace();

        match words.next() {
            None | Some("n") => match command.activate(&mut viewer) {
                Ok(Some(_)) => {}
                Ok(None) => println!("  {}", style("No illegal pixel found").yellow()),
                Err(e) => println!("  {} {}", style("error:").red().bold(), e),
            },
            Some("r") => match words.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(i) if i < args.files.len() => {
                    viewer.resource_id = i as i64;
                    debug!(resource = i, "Selected resource");
                }
                _ => println!("  expected a resource index below {}", args.files.len()),
            },
            Some("e") => {
                viewer.event_id += 1;
                debug!(event = viewer.event_id, "New event");
            }
            Some("q") => break,
            Some(_) => print_help(&args.files),
        }
    }

    Ok(())
}

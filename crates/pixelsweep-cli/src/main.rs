mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixelsweep", about = "Locate NaN, infinite and negative pixels in float textures")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an image and list its illegal pixels
    Scan(commands::scan::ScanArgs),
    /// Step through illegal pixels interactively
    Walk(commands::walk::WalkArgs),
    /// Print or save the default scan config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Walk(args) => commands::walk::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

// cli.rs - Command-line interface configuration
use crate::demo::DemoKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pixel-demos")]
#[command(about = "Mouse-driven grayscale pixel demos", long_about = None)]
pub struct Cli {
    /// Which demo to run
    #[arg(value_enum)]
    pub demo: DemoKind,

    /// Window width in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Window height in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Target frames per second
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Show the coordinate/FPS overlay from the start (toggle with H)
    #[arg(long, default_value = "false")]
    pub hud: bool,

    /// Directory that S-key snapshots are written to
    #[arg(long, default_value = ".")]
    pub snapshot_dir: PathBuf,
}

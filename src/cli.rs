use std::path::PathBuf;

use clap::Parser;

/// Command-line surface. The binary is TUI-only; the flags only adjust
/// where it keeps its data.
#[derive(Parser)]
#[command(name = "vkd", about = concat!("vkdeck v", env!("CARGO_PKG_VERSION"), " - plan VK posting automation from the terminal"), version)]
pub struct Cli {
    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir")]
    pub data_dir: Option<PathBuf>,
}

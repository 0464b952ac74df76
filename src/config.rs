//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// A terminal maze game.
///
/// Walk the player token from the start cell to the goal cell of each level with the arrow keys or
/// `h`/`j`/`k`/`l`.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Index of the level to start on.
    #[arg(long, default_value_t = 0)]
    pub start_level: usize,
    /// Directory scanned for additional `.maze` level files, played after the built-in levels.
    #[arg(long, value_name = "DIR")]
    pub levels_dir: Option<PathBuf>,
    /// Keep accepting movement after the goal has been reached.
    #[arg(long)]
    pub roam_after_win: bool,
    /// File receiving the log output; nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,
}

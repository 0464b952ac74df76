//! This crate contains the library for the terminal maze game mazetui.
//!
//! The game walks a player token through an ordered set of hand-authored levels. Movement is
//! blocked by walls and the grid's edges, and reaching a goal cell completes the level.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod catalog;
mod config;
mod events;
mod file_loader;
mod game;
mod level;
mod logging;
mod session;
mod types;
mod ui;

use color_eyre::eyre::Result;

pub use app::App;
pub use config::Args;
use session::Session;

/// Runs the game with the given configuration until the user quits.
///
/// This function installs the file logger if one is configured, builds the application state and
/// takes over the terminal for as long as the main loop runs.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - The levels cannot be loaded or the start level is invalid
/// - The terminal cannot be set up or drawn to
pub fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        logging::install(path, args.log_level)?;
    }

    let mut app = App::new(args)?;
    let mut session = Session::acquire()?;
    app.run(session.terminal())
}

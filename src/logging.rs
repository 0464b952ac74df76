//! Log subscriber setup.
//!
//! The terminal belongs to the interface while the game runs, so log lines go to a file instead of
//! standard output or standard error.

use std::{fs::File, path::Path, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing::Level;

/// Installs a global subscriber writing plain-text log lines to `path`.
///
/// The file is truncated if it exists. Events more verbose than `level` are discarded.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be created
/// - A global subscriber has already been installed
pub(crate) fn install(path: &Path, level: Level) -> Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

//! Scoped ownership of the terminal.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::error;

/// Guard over the terminal while the game runs.
///
/// Acquiring a session switches the terminal to raw mode and the alternate screen, which is what
/// routes key presses to the game. Dropping it restores the terminal, including when the game loop
/// returns early with an error.
pub(crate) struct Session {
    /// Terminal the interface is drawn on.
    terminal: DefaultTerminal,
}

impl Session {
    /// Takes over the terminal.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn acquire() -> Result<Self> {
        let terminal = ratatui::try_init()?;

        Ok(Self { terminal })
    }

    /// Returns the terminal to draw on.
    pub(crate) fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(err) = ratatui::try_restore() {
            error!(%err, "failed to restore terminal");
        }
    }
}

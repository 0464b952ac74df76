//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{debug, info};

use crate::{
    types::{Advance, Direction, Screen, Status},
    App,
};

/// Action requested by a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Move the player one step.
    Move(Direction),
    /// Go to the next level, or start over once every level is complete.
    Advance,
    /// Put the player back at the start of the current level.
    Reset,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Maps a key to the command it triggers.
    ///
    /// Arrow keys and the `h`/`j`/`k`/`l` keys move the player, `n`, Enter and Space advance, `r`
    /// resets the level and `q` or Esc quits. Any other key maps to [`None`].
    pub(crate) const fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Move(Direction::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Move(Direction::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Self::Move(Direction::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Self::Move(Direction::Right)),
            KeyCode::Enter | KeyCode::Char('n' | ' ') => Some(Self::Advance),
            KeyCode::Char('r') => Some(Self::Reset),
            KeyCode::Esc | KeyCode::Char('q') => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches the command bound to the pressed key. It
/// uses a timeout to avoid blocking the UI. Key release and repeat events are ignored so that a key
/// press moves the player exactly once.
///
/// # Errors
///
/// This function may return errors from reading terminal events or from the game controller.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(command) = Command::from_key(key.code) {
                    apply(app, command)?;
                }
            }
        }
    }

    Ok(())
}

/// Applies a command to the application state.
///
/// Movement and level resets only act on the in-game screen. Advancing only acts once the current
/// level is won; on the completion notice it starts the game over from the first level.
///
/// # Errors
///
/// This function returns the errors of the game controller, which only occur on defective levels.
pub(crate) fn apply(app: &mut App, command: Command) -> Result<()> {
    match (command, app.screen) {
        (Command::Quit, _) => app.exit = true,
        (Command::Move(direction), Screen::InGame) => {
            let _ = app.game.move_player(direction);
        }
        (Command::Reset, Screen::InGame) => app.game.reset_level()?,
        (Command::Advance, Screen::InGame) if app.game.status() == Status::Won => {
            match app.game.advance_level()? {
                Advance::Next(index) => info!(level = index, "advanced to next level"),
                Advance::AllComplete => app.screen = Screen::AllComplete,
            }
        }
        (Command::Advance, Screen::AllComplete) => {
            app.game.restart()?;
            app.screen = Screen::InGame;
        }
        (command, screen) => debug!(?command, ?screen, "ignoring command"),
    }

    Ok(())
}

//! Core application state and main loop of the maze game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{catalog::Catalog, config::Args, events, file_loader, game::Game, types::Screen, ui};

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui renders the game and keyboard events write to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    ///
    /// This field holds whether the maze is shown on its own or under the notice announcing that
    /// every level has been completed.
    pub(crate) screen: Screen,
    /// Game state controller.
    ///
    /// This field owns the level catalog, the current level, the player position and the win flag.
    /// The renderer only reads from it.
    pub(crate) game: Game,
}

impl App {
    /// Creates the application from the command line configuration.
    ///
    /// This function builds the catalog from the built-in levels followed by the levels found in
    /// the configured directory, then starts the game on the configured level.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The levels directory cannot be read
    /// - The start level index is not in the catalog
    /// - A built-in level is malformed
    pub fn new(args: &Args) -> Result<Self> {
        let mut catalog = Catalog::builtin()?;
        if let Some(dir) = &args.levels_dir {
            catalog.extend(file_loader::fetch_levels(dir)?);
        }

        let game = Game::new(catalog, args.start_level, !args.roam_after_win)?;

        Ok(Self::with_game(game))
    }

    /// Creates the application around an already started game.
    pub(crate) const fn with_game(game: Game) -> Self {
        Self {
            exit: false,
            screen: Screen::InGame,
            game,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current state, then waits for user input and updates the state. The
    /// loop continues until the exit condition is `true`, after which the function returns to the
    /// call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::types::Position;

    /// Builds the arguments of a plain invocation.
    fn default_args() -> Args {
        Args {
            start_level: 0,
            levels_dir: None,
            roam_after_win: false,
            log_file: None,
            log_level: tracing::Level::INFO,
        }
    }

    #[test]
    fn test_new_with_defaults() {
        let app = App::new(&default_args()).expect("app should start");

        assert!(!app.exit);
        assert_eq!(app.screen, Screen::InGame);
        assert_eq!(app.game.level_count(), 3);
        assert_eq!(app.game.state().level_index, 0);
        assert_eq!(app.game.state().player, Position::new(0, 0));
    }

    #[test]
    fn test_new_with_start_level() {
        let args = Args {
            start_level: 2,
            ..default_args()
        };

        let app = App::new(&args).expect("app should start");

        assert_eq!(
            app.game.level().map(crate::level::Level::name).ok(),
            Some("Hard")
        );
    }

    #[test]
    fn test_new_with_out_of_range_start_level() {
        let args = Args {
            start_level: 3,
            ..default_args()
        };

        assert!(App::new(&args).is_err());
    }

    #[test]
    fn test_new_with_missing_levels_dir() {
        let args = Args {
            levels_dir: Some(PathBuf::from("definitely/not/a/levels/dir")),
            ..default_args()
        };

        assert!(App::new(&args).is_err());
    }
}

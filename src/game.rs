//! Game state controller.
//!
//! This module contains the [`Game`] struct, which owns the level catalog together with the state of
//! the game in progress and applies movement and level transitions to it.

use tracing::{debug, error, info};

use crate::{
    catalog::Catalog,
    level::{CellKind, Level},
    types::{Advance, Defect, Direction, GameState, LevelError, MoveOutcome, Status},
};

/// Controller for a game in progress.
///
/// This structure holds the catalog of levels and the mutable [`GameState`]. Every operation either
/// fully applies or leaves the state untouched; the renderer re-reads the state after each one.
#[derive(Debug)]
pub(crate) struct Game {
    /// Levels available to the player.
    catalog: Catalog,
    /// Current level, player position and win flag.
    state: GameState,
    /// Whether movement input is ignored once the level is won.
    ///
    /// This field is `true` unless the player opts into roaming after the win. Without the freeze,
    /// stepping off the goal keeps the level won.
    freeze_on_win: bool,
}

impl Game {
    /// Creates a game positioned at the start of the level at `level_index`.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - [`LevelError::OutOfRange`] if `level_index` is not in the catalog
    /// - [`LevelError::Malformed`] if the level has no start cell
    pub(crate) fn new(
        catalog: Catalog,
        level_index: usize,
        freeze_on_win: bool,
    ) -> Result<Self, LevelError> {
        let state = initial_state(&catalog, level_index)?;
        info!(level = level_index, "starting game");

        Ok(Self {
            catalog,
            state,
            freeze_on_win,
        })
    }

    /// Places the player at the start of the level at `level_index`.
    ///
    /// This function scans the level in row-major order for its first start cell, moves the player
    /// there and clears the win flag. On error the state is left as it was.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - [`LevelError::OutOfRange`] if `level_index` is not in the catalog
    /// - [`LevelError::Malformed`] if the level has no start cell
    pub(crate) fn initialize(&mut self, level_index: usize) -> Result<(), LevelError> {
        self.state = initial_state(&self.catalog, level_index)?;
        info!(
            level = level_index,
            x = self.state.player.x,
            y = self.state.player.y,
            "level initialized"
        );

        Ok(())
    }

    /// Moves the player one step in `direction` if the destination is walkable.
    ///
    /// A step is accepted when the destination lies inside the grid and is not a wall. Landing on a
    /// goal wins the level. Rejected steps are no-ops, not errors.
    pub(crate) fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.step(direction);
        match outcome {
            MoveOutcome::Moved(to) => debug!(?direction, x = to.x, y = to.y, "player moved"),
            MoveOutcome::ReachedGoal(to) => {
                info!(?direction, x = to.x, y = to.y, "goal reached");
            }
            MoveOutcome::Blocked | MoveOutcome::Frozen => {
                debug!(?direction, ?outcome, "move ignored");
            }
        }

        outcome
    }

    /// Applies a single step without logging.
    fn step(&mut self, direction: Direction) -> MoveOutcome {
        if self.state.won && self.freeze_on_win {
            return MoveOutcome::Frozen;
        }

        let level = match self.catalog.get(self.state.level_index) {
            Ok(level) => level,
            Err(err) => {
                error!(%err, "game state points outside the catalog");
                return MoveOutcome::Blocked;
            }
        };
        let Some(target) = self.state.player.offset(direction) else {
            return MoveOutcome::Blocked;
        };

        match level.cell(target) {
            None | Some(CellKind::Wall) => MoveOutcome::Blocked,
            Some(CellKind::Goal) => {
                self.state.player = target;
                self.state.won = true;
                MoveOutcome::ReachedGoal(target)
            }
            Some(CellKind::Path | CellKind::Start) => {
                self.state.player = target;
                MoveOutcome::Moved(target)
            }
        }
    }

    /// Moves on to the next level.
    ///
    /// On the last level this function reports [`Advance::AllComplete`] and changes nothing; the
    /// caller decides whether to restart or stop. Otherwise the next level is initialized.
    ///
    /// # Errors
    ///
    /// This function returns [`LevelError::Malformed`] if the next level has no start cell.
    pub(crate) fn advance_level(&mut self) -> Result<Advance, LevelError> {
        let next = self.state.level_index.saturating_add(1);
        if next >= self.catalog.count() {
            info!(levels = self.catalog.count(), "all levels complete");
            return Ok(Advance::AllComplete);
        }

        self.initialize(next)?;
        Ok(Advance::Next(next))
    }

    /// Puts the player back at the start of the current level.
    ///
    /// # Errors
    ///
    /// This function returns the same errors as [`Game::initialize`].
    pub(crate) fn reset_level(&mut self) -> Result<(), LevelError> {
        self.initialize(self.state.level_index)
    }

    /// Starts over from the first level.
    ///
    /// # Errors
    ///
    /// This function returns the same errors as [`Game::initialize`].
    pub(crate) fn restart(&mut self) -> Result<(), LevelError> {
        self.initialize(0)
    }

    /// Returns the level being played.
    ///
    /// # Errors
    ///
    /// This function returns [`LevelError::OutOfRange`] if the state points outside the catalog,
    /// which construction and every transition rule out.
    pub(crate) fn level(&self) -> Result<&Level, LevelError> {
        self.catalog.get(self.state.level_index)
    }

    /// Returns a snapshot of the current state.
    pub(crate) const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the current level is still being played or already won.
    pub(crate) const fn status(&self) -> Status {
        if self.state.won {
            Status::Won
        } else {
            Status::Playing
        }
    }

    /// Returns the number of levels in the catalog.
    pub(crate) fn level_count(&self) -> usize {
        self.catalog.count()
    }

    /// Returns whether the current level is the last one in the catalog.
    pub(crate) fn is_last_level(&self) -> bool {
        self.state.level_index.saturating_add(1) >= self.catalog.count()
    }
}

/// Builds the state for the start of the level at `level_index`.
fn initial_state(catalog: &Catalog, level_index: usize) -> Result<GameState, LevelError> {
    let level = catalog.get(level_index)?;
    let player = level.start().ok_or_else(|| LevelError::Malformed {
        name: level.name().to_owned(),
        defect: Defect::NoStart,
    })?;

    Ok(GameState {
        level_index,
        player,
        won: false,
    })
}

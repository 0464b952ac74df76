//! Type definitions shared by the game state, the input handling and the renderer.

use thiserror::Error;

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. It is used to determine
/// what to render on top of the maze and how the advance key should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// In-game maze screen.
    ///
    /// This variant represents the regular screen where the player walks the current level.
    InGame,
    /// Completion notice screen.
    ///
    /// This variant represents the notice shown after the player asks to advance past the last
    /// level. The maze stays visible underneath the notice.
    AllComplete,
}

/// One of the four axis-aligned unit steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Step of `(0, -1)`.
    Up,
    /// Step of `(0, 1)`.
    Down,
    /// Step of `(-1, 0)`.
    Left,
    /// Step of `(1, 0)`.
    Right,
}

impl Direction {
    /// Returns the `(dx, dy)` offset of the step.
    pub(crate) const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

impl TryFrom<(isize, isize)> for Direction {
    type Error = InvalidStep;

    /// Converts a `(dx, dy)` offset into a direction.
    ///
    /// Only the four axis-aligned unit steps convert; the null step, diagonals and longer jumps are
    /// rejected.
    fn try_from((dx, dy): (isize, isize)) -> Result<Self, Self::Error> {
        match (dx, dy) {
            (0, -1) => Ok(Self::Up),
            (0, 1) => Ok(Self::Down),
            (-1, 0) => Ok(Self::Left),
            (1, 0) => Ok(Self::Right),
            _ => Err(InvalidStep { dx, dy }),
        }
    }
}

/// Offset that is not one of the four axis-aligned unit steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("({dx}, {dy}) is not a unit step along one axis")]
pub(crate) struct InvalidStep {
    /// Horizontal component of the offset.
    pub(crate) dx: isize,
    /// Vertical component of the offset.
    pub(crate) dy: isize,
}

/// Grid coordinate of a cell.
///
/// The origin is the top-left cell of a level, `x` grows towards the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    /// Column index.
    pub(crate) x: usize,
    /// Row index.
    pub(crate) y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    pub(crate) const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position one step away in the given direction.
    ///
    /// This function yields [`None`] when the step would leave the non-negative quadrant. Upper
    /// bounds depend on the level and are checked by the caller.
    pub(crate) fn offset(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();

        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

/// Mutable state of a game in progress.
///
/// This structure holds everything that changes while playing: the level being played, where the
/// player token stands and whether the goal has been reached. It is owned by the game controller and
/// only read by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GameState {
    /// Index of the current level in the catalog.
    pub(crate) level_index: usize,
    /// Position of the player token.
    pub(crate) player: Position,
    /// Whether the player has reached a goal cell on the current level.
    pub(crate) won: bool,
}

/// Coarse state of the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    /// The goal has not been reached yet.
    Playing,
    /// The goal has been reached and the game waits for a level advance.
    Won,
}

/// Result of a movement request.
///
/// Only [`MoveOutcome::Moved`] and [`MoveOutcome::ReachedGoal`] change the game state, the other
/// variants are no-ops reported for logging and testing purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    /// The player stepped onto a path or start cell.
    Moved(Position),
    /// The player stepped onto a goal cell and the level is won.
    ReachedGoal(Position),
    /// The step would leave the grid or enter a wall.
    Blocked,
    /// The level is already won and movement is frozen.
    Frozen,
}

/// Result of a level advance request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Advance {
    /// The game moved on to the level at the given index.
    Next(usize),
    /// The current level is the last one; there is nothing to advance to.
    AllComplete,
}

/// Structural problems a level definition can have.
///
/// This enumeration holds the reasons a level gets rejected, either while parsing its text art or
/// while validating its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub(crate) enum Defect {
    /// The level has no rows at all.
    #[error("level has no rows")]
    Empty,
    /// A row has a different length than the first row.
    #[error("row {row} differs in length from the first row")]
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
    },
    /// A character does not encode any cell kind.
    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        column: usize,
        /// The offending character.
        symbol: char,
    },
    /// The level has no start cell.
    #[error("level has no start cell")]
    NoStart,
    /// The level has more than one start cell.
    #[error("level has more than one start cell")]
    MultipleStarts,
    /// The level has no goal cell.
    #[error("level has no goal cell")]
    NoGoal,
}

/// Errors raised by the level catalog and the game controller.
///
/// Both variants point at defective static data or configuration rather than at player input; an
/// illegal move is never an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum LevelError {
    /// A level index outside of the catalog was requested.
    #[error("level index {index} is out of range (the catalog holds {count} levels)")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of levels in the catalog.
        count: usize,
    },
    /// A level definition is structurally broken.
    #[error("level {name:?} is malformed: {defect}")]
    Malformed {
        /// Display name of the level.
        name: String,
        /// What is wrong with it.
        defect: Defect,
    },
}

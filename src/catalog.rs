//! Ordered collection of the levels available to the game.

use crate::{
    level::{Level, BUILTIN_LEVELS},
    types::LevelError,
};

/// Ordered sequence of playable levels.
///
/// This structure holds the levels in the order they are played. It is filled once at startup, first
/// with the built-in levels and then with any level loaded from disk, and is read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Catalog {
    /// Levels in play order.
    levels: Vec<Level>,
}

impl Catalog {
    /// Creates a catalog holding the given levels in order.
    pub(crate) const fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Creates a catalog holding the built-in levels.
    ///
    /// # Errors
    ///
    /// This function returns [`LevelError::Malformed`] if an embedded level fails to parse or to
    /// validate.
    pub(crate) fn builtin() -> Result<Self, LevelError> {
        let levels = BUILTIN_LEVELS
            .iter()
            .map(|(name, layout)| {
                let level = Level::parse(name, layout)?;
                level.validate()?;
                Ok(level)
            })
            .collect::<Result<Vec<_>, LevelError>>()?;

        Ok(Self::new(levels))
    }

    /// Appends levels after the ones already in the catalog.
    pub(crate) fn extend(&mut self, levels: Vec<Level>) {
        self.levels.extend(levels);
    }

    /// Returns the level at `index`.
    ///
    /// # Errors
    ///
    /// This function returns [`LevelError::OutOfRange`] if `index` is not lower than
    /// [`Catalog::count`].
    pub(crate) fn get(&self, index: usize) -> Result<&Level, LevelError> {
        self.levels.get(index).ok_or(LevelError::OutOfRange {
            index,
            count: self.count(),
        })
    }

    /// Returns the number of levels in the catalog.
    pub(crate) fn count(&self) -> usize {
        self.levels.len()
    }
}

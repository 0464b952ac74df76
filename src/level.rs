//! Level data and text-art parsing.
//!
//! This module contains the [`Level`] struct and related functionality for turning text art into
//! grids of cell kinds, validating them, and the built-in levels shipped with the game.

use crate::types::{Defect, LevelError, Position};

/// Built-in levels, ordered by increasing difficulty.
///
/// Each entry pairs the display name of a level with its text art. The art uses one character per
/// cell: `.` for paths, `#` for walls, `S` for the start and `G` for the goal.
pub(crate) const BUILTIN_LEVELS: [(&str, &str); 3] = [
    (
        "Easy",
        "\
S.###
#...#
###.#
#G..#
#####",
    ),
    (
        "Medium",
        "\
S.#####
#.....#
#####.#
#.....#
#.#####
#....G#
#######",
    ),
    (
        "Hard",
        "\
S.#######
#.......#
#######.#
#.......#
#.#######
#.......#
#######.#
#G......#
#########",
    ),
];

/// Classification of a grid tile.
///
/// This enumeration controls both traversability and the win condition of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellKind {
    /// Walkable floor.
    Path,
    /// Impassable tile.
    Wall,
    /// Walkable tile where the player token is placed when the level begins.
    Start,
    /// Walkable tile that wins the level when stepped on.
    Goal,
}

impl CellKind {
    /// Decodes a text-art character.
    pub(crate) const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Path),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }
}

/// Labyrinth level definition.
///
/// This structure holds one static maze grid together with its display name. The grid is always
/// rectangular and non-empty, which [`Level::parse`] guarantees since it is the only constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Level {
    /// Display name of the level.
    ///
    /// This field holds the name shown in the header while playing. Built-in levels carry a fixed
    /// name, loaded levels are named after their file stem.
    name: String,
    /// Cells of the level as rows of cell kinds.
    ///
    /// This field holds the grid in row-major order, so the outer vector is indexed by `y` and the
    /// inner vectors by `x`.
    grid: Vec<Vec<CellKind>>,
}

impl Level {
    /// Builds a level from a display name and its text art.
    ///
    /// This function decodes every character of the art into a cell kind and checks that the grid
    /// is rectangular. Blank lines around the art and trailing whitespace on each row are ignored.
    /// It does not check for start and goal cells; see [`Level::validate`] for that.
    ///
    /// # Errors
    ///
    /// This function returns [`LevelError::Malformed`] if:
    /// - The art has no rows
    /// - A character does not encode a cell kind
    /// - A row differs in length from the first one
    pub(crate) fn parse(name: &str, layout: &str) -> Result<Self, LevelError> {
        let malformed = |defect| LevelError::Malformed {
            name: name.to_owned(),
            defect,
        };

        let mut lines: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .skip_while(|line| line.is_empty())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            let _ = lines.pop();
        }

        let mut grid: Vec<Vec<CellKind>> = Vec::new();
        for (row, line) in lines.into_iter().enumerate() {
            let mut cells = Vec::new();
            for (column, symbol) in line.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol).ok_or_else(|| {
                    malformed(Defect::UnknownSymbol {
                        row,
                        column,
                        symbol,
                    })
                })?;
                cells.push(kind);
            }

            if grid.first().is_some_and(|first| first.len() != cells.len()) {
                return Err(malformed(Defect::Ragged { row }));
            }
            grid.push(cells);
        }

        if grid.iter().all(Vec::is_empty) {
            return Err(malformed(Defect::Empty));
        }

        Ok(Self {
            name: name.to_owned(),
            grid,
        })
    }

    /// Checks that the level is playable.
    ///
    /// A playable level has exactly one start cell and at least one goal cell. Whether the goal can
    /// actually be reached from the start is not checked.
    ///
    /// # Errors
    ///
    /// This function returns [`LevelError::Malformed`] with [`Defect::NoStart`],
    /// [`Defect::MultipleStarts`] or [`Defect::NoGoal`].
    pub(crate) fn validate(&self) -> Result<(), LevelError> {
        let starts = self
            .cells()
            .filter(|&(_, kind)| kind == CellKind::Start)
            .count();
        let defect = match starts {
            0 => Some(Defect::NoStart),
            1 => None,
            _ => Some(Defect::MultipleStarts),
        }
        .or_else(|| {
            (!self.cells().any(|(_, kind)| kind == CellKind::Goal)).then_some(Defect::NoGoal)
        });

        match defect {
            Some(defect) => Err(LevelError::Malformed {
                name: self.name.clone(),
                defect,
            }),
            None => Ok(()),
        }
    }

    /// Returns the display name of the level.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rows in the grid.
    pub(crate) fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Returns the number of columns in the grid.
    pub(crate) fn columns(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Returns the kind of the cell at `position`, or [`None`] if it lies outside the grid.
    pub(crate) fn cell(&self, position: Position) -> Option<CellKind> {
        self.grid.get(position.y)?.get(position.x).copied()
    }

    /// Iterates over every cell in row-major order.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &kind)| (Position::new(x, y), kind))
        })
    }

    /// Returns the first start cell found scanning in row-major order.
    pub(crate) fn start(&self) -> Option<Position> {
        self.cells()
            .find_map(|(position, kind)| (kind == CellKind::Start).then_some(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses one of the built-in levels by name.
    fn builtin(name: &str) -> Level {
        let (name, layout) = BUILTIN_LEVELS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .expect("built-in level should exist");
        Level::parse(name, layout).expect("built-in level should parse")
    }

    #[test]
    fn test_builtin_levels_are_valid() {
        for (name, layout) in BUILTIN_LEVELS {
            let level = Level::parse(name, layout).expect("built-in level should parse");

            assert!(level.validate().is_ok(), "{name} should validate");
            assert_eq!(
                level
                    .cells()
                    .filter(|&(_, kind)| kind == CellKind::Start)
                    .count(),
                1,
                "{name} should have exactly one start"
            );
            assert!(
                level.cells().any(|(_, kind)| kind == CellKind::Goal),
                "{name} should have a goal"
            );
            assert_eq!(
                level.cells().count(),
                level.rows() * level.columns(),
                "{name} should be rectangular"
            );
        }
    }

    #[test]
    fn test_builtin_levels_grow_in_size() {
        let sizes: Vec<(usize, usize)> = BUILTIN_LEVELS
            .iter()
            .map(|(name, _)| {
                let level = builtin(name);
                (level.rows(), level.columns())
            })
            .collect();

        assert_eq!(sizes, vec![(5, 5), (7, 7), (9, 9)]);
    }

    #[test]
    fn test_parse_easy_level() {
        let level = builtin("Easy");

        assert_eq!(level.name(), "Easy");
        assert_eq!(level.cell(Position::new(0, 0)), Some(CellKind::Start));
        assert_eq!(level.cell(Position::new(1, 0)), Some(CellKind::Path));
        assert_eq!(level.cell(Position::new(2, 0)), Some(CellKind::Wall));
        assert_eq!(level.cell(Position::new(1, 3)), Some(CellKind::Goal));
        assert_eq!(level.cell(Position::new(5, 0)), None);
        assert_eq!(level.cell(Position::new(0, 5)), None);
        assert_eq!(level.start(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_parse_ignores_surrounding_blank_lines_and_trailing_spaces() {
        let level = Level::parse("padded", "\n\nS.G  \n###\n\n").expect("level should parse");

        assert_eq!(level.rows(), 2);
        assert_eq!(level.columns(), 3);
    }

    #[test]
    fn test_parse_rejects_indented_first_row() {
        let result = Level::parse("indented", "  S.G\n#.#");

        assert_eq!(
            result,
            Err(LevelError::Malformed {
                name: "indented".to_owned(),
                defect: Defect::UnknownSymbol {
                    row: 0,
                    column: 0,
                    symbol: ' ',
                },
            })
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let result = Level::parse("empty", "  \n\n");

        assert_eq!(
            result,
            Err(LevelError::Malformed {
                name: "empty".to_owned(),
                defect: Defect::Empty,
            })
        );
    }

    #[test]
    fn test_parse_unknown_symbol() {
        let result = Level::parse("typo", "S.#\n#x#\n#G#");

        assert_eq!(
            result,
            Err(LevelError::Malformed {
                name: "typo".to_owned(),
                defect: Defect::UnknownSymbol {
                    row: 1,
                    column: 1,
                    symbol: 'x',
                },
            })
        );
    }

    #[test]
    fn test_parse_ragged_rows() {
        let result = Level::parse("ragged", "S.#\n#.\n#G#");

        assert_eq!(
            result,
            Err(LevelError::Malformed {
                name: "ragged".to_owned(),
                defect: Defect::Ragged { row: 1 },
            })
        );
    }

    #[test]
    fn test_parse_interior_blank_line_is_ragged() {
        let result = Level::parse("gap", "S.G\n\n###");

        assert!(
            matches!(
                result,
                Err(LevelError::Malformed {
                    defect: Defect::Ragged { row: 1 },
                    ..
                })
            ),
            "a blank row inside the art should be rejected"
        );
    }

    #[test]
    fn test_validate_missing_start() {
        let level = Level::parse("nostart", "..#\n#G#").expect("level should parse");

        assert_eq!(
            level.validate(),
            Err(LevelError::Malformed {
                name: "nostart".to_owned(),
                defect: Defect::NoStart,
            })
        );
        assert_eq!(level.start(), None);
    }

    #[test]
    fn test_validate_multiple_starts() {
        let level = Level::parse("twostarts", "S.S\n#G#").expect("level should parse");

        assert!(matches!(
            level.validate(),
            Err(LevelError::Malformed {
                defect: Defect::MultipleStarts,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_missing_goal() {
        let level = Level::parse("nogoal", "S..\n###").expect("level should parse");

        assert!(matches!(
            level.validate(),
            Err(LevelError::Malformed {
                defect: Defect::NoGoal,
                ..
            })
        ));
    }

    #[test]
    fn test_start_is_first_in_row_major_order() {
        let level = Level::parse("twostarts", "..S\nS.G").expect("level should parse");

        assert_eq!(level.start(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(CellKind::from_symbol(' '), None);
        assert_eq!(CellKind::from_symbol('s'), None);
        assert_eq!(CellKind::from_symbol('0'), None);
    }
}

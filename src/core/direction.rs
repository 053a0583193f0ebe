//! Move directions and the traversal order they induce on the grid.
//!
//! A [`Direction`] is the only input [`crate::engine::Game::shift`] takes.
//! Presentation layers translate raw input (a swipe, a key code, a wire
//! byte) into a `Direction` at their boundary via [`Direction::from_u8`]
//! or `FromStr`; malformed input never reaches the engine.
//!
//! Each direction also defines a traversal: the flat indices of every
//! row or column ordered from the far end (the end tiles move toward) to
//! the near end. The engine runs one merge routine over those index
//! sequences instead of keeping four near-copies of the move logic.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::grid::GRID_SIZE;

/// A direction to slide/merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert a raw byte to a direction (0=Up, 1=Down, 2=Left, 3=Right).
    ///
    /// Returns `None` for any other value, so unrecognized input from a
    /// presentation layer decays to "no move" at the boundary.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Flat grid indices of the `line`-th row (Left/Right) or column
    /// (Up/Down), ordered far end first.
    ///
    /// For Left the row reads left to right, for Right right to left,
    /// for Up the column reads top to bottom, for Down bottom to top.
    /// `line` must be in `0..GRID_SIZE`.
    pub(crate) fn line_indices(self, line: usize) -> [usize; GRID_SIZE] {
        debug_assert!(line < GRID_SIZE);

        let mut indices = [0usize; GRID_SIZE];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = match self {
                Direction::Left => line * GRID_SIZE + i,
                Direction::Right => line * GRID_SIZE + (GRID_SIZE - 1 - i),
                Direction::Up => i * GRID_SIZE + line,
                Direction::Down => (GRID_SIZE - 1 - i) * GRID_SIZE + line,
            };
        }
        indices
    }
}

impl FromStr for Direction {
    type Err = ();

    /// Parse the direction names a gesture layer emits (`"UP"`, `"down"`,
    /// ...). Case-insensitive; anything else is `Err(())`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

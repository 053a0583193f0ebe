//! Core board types: the grid, directions, RNG, and move records.
//!
//! This module contains the building blocks the engine is assembled from.
//! Nothing here mutates game state on its own; the `engine` module drives
//! every transition.

pub mod direction;
pub mod grid;
pub mod record;
pub mod rng;

pub use direction::Direction;
pub use grid::{Grid, GRID_SIZE, WIN_TILE};
pub use record::{MoveRecord, SpawnRecord};
pub use rng::{GameRng, GameRngState};

//! # rust-2048
//!
//! A deterministic rules engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: The engine owns the grid, score, and status
//!    flags and mutates them only through [`Game::shift`]. No I/O, no UI
//!    lifecycle, no blocking.
//!
//! 2. **Deterministic**: All randomness flows through a seedable
//!    [`GameRng`]. Same seed plus same moves produces the same game.
//!
//! 3. **Read-Only Views**: Callers observe state through `&Grid` and
//!    accessors. There is no mutation path outside the engine.
//!
//! ## Architecture
//!
//! - **One Merge Routine**: All four directions share a single line
//!   compaction/merge pass, parameterized by a traversal mapping on
//!   [`Direction`]. No per-direction near-copies.
//!
//! - **Snapshot/Restore**: [`GameSnapshot`] captures resumable state
//!   (grid, score, flags, RNG position) in O(1) regardless of how many
//!   moves were played.
//!
//! ## Modules
//!
//! - `core`: Grid, directions, RNG, move records
//! - `engine`: The game state machine, line merge, snapshots
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, Game};
//!
//! let mut game = Game::new(42);
//! let changed = game.shift(Direction::Left);
//! println!("score {} changed {}", game.score(), changed);
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameRng, GameRngState, Grid, MoveRecord, SpawnRecord, GRID_SIZE, WIN_TILE,
};

pub use crate::engine::{Game, GameSnapshot};

//! Resumable engine state.
//!
//! A [`GameSnapshot`] is everything a persistence layer needs to store a
//! game in progress and resume it later: the grid, score, status flags,
//! move count, and the RNG stream position. Capture is O(1) regardless
//! of how many moves were played; move history is session-local and not
//! part of a snapshot.

use serde::{Deserialize, Serialize};

use crate::core::grid::CELL_COUNT;
use crate::core::rng::GameRngState;

/// A serializable checkpoint of a game in progress.
///
/// Produced by `Game::snapshot` and consumed by `Game::from_snapshot`.
/// A restored game replays the identical spawn sequence the original
/// would have produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Row-major tile values; `0` is empty.
    pub cells: [u32; CELL_COUNT],

    /// Accumulated score.
    pub score: u64,

    /// Whether a 2048 tile has been formed.
    pub won: bool,

    /// Whether the board was terminal after the last move.
    pub over: bool,

    /// Number of accepted moves so far.
    pub move_count: u32,

    /// RNG stream position.
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode to a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a blob produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

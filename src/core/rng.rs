//! Deterministic random number generation for tile spawning.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical spawn sequence
//! - **Serializable**: O(1) state capture and restore for snapshots
//!
//! The engine draws from this RNG in exactly two places: the spawned
//! tile's value and the empty cell it lands in. Keeping both draws behind
//! one seedable source makes whole games replayable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing tile spawns.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness, and
/// exposes its stream position so a snapshot can resume mid-game without
/// replaying draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw an integer uniformly from `range`.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Pick one element of `slice` uniformly, or `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Rebuild an RNG that continues from a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Stores the ChaCha8 word position, so capture is O(1) no matter how
/// many draws the session already made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the stream was created from
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

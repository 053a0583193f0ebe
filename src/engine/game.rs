//! The 2048 game state machine.
//!
//! [`Game`] owns all mutable state: the grid, the score, the sticky
//! `won`/`over` flags, the RNG, and the move history. The only mutating
//! entry point after construction is [`Game::shift`].
//!
//! ## Move Flow
//!
//! `shift` runs the line pass over every row or column of the direction.
//! If no cell changed, the move was blocked: nothing is committed, no
//! tile spawns, no flag moves. If any cell changed, the engine commits
//! the new grid, adds the merge points to the score, spawns one tile,
//! re-evaluates the win and terminal flags, and records the move.
//!
//! ## Status Flags
//!
//! Both flags are sticky and advisory. `won` never clears, even if every
//! 2048 tile is later merged away. `over` never clears either, and the
//! engine keeps accepting `shift` calls after it sets; a terminal grid
//! simply blocks every direction, so those calls return false.

use im::Vector;
use log::{debug, trace};
use std::fmt;

use crate::core::direction::Direction;
use crate::core::grid::{Grid, CELL_COUNT, GRID_SIZE, WIN_TILE};
use crate::core::record::{MoveRecord, SpawnRecord};
use crate::core::rng::GameRng;

use super::line::slide_line;
use super::snapshot::GameSnapshot;

/// Tiles placed on a fresh board.
const INITIAL_TILES: usize = 2;

/// A single game session.
#[derive(Clone)]
pub struct Game {
    grid: Grid,
    score: u64,
    won: bool,
    over: bool,
    rng: GameRng,
    history: Vector<MoveRecord>,
    move_count: u32,
}

impl Game {
    /// Create a fresh game: zeroed grid, two spawned tiles, score 0.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a fresh game drawing from a caller-provided RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        let mut game = Self {
            grid: Grid::default(),
            score: 0,
            won: false,
            over: false,
            rng,
            history: Vector::new(),
            move_count: 0,
        };
        for _ in 0..INITIAL_TILES {
            game.spawn_tile();
        }
        game
    }

    /// Restart in place with a new seed.
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Resume a game from a snapshot.
    ///
    /// The restored game has the snapshot's grid, score, and flags, and
    /// its RNG continues the original spawn stream. History restarts
    /// empty; it is a session-local record.
    #[must_use]
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            grid: Grid::from_cells(snapshot.cells),
            score: snapshot.score,
            won: snapshot.won,
            over: snapshot.over,
            rng: GameRng::from_state(&snapshot.rng),
            history: Vector::new(),
            move_count: snapshot.move_count,
        }
    }

    /// Capture a resumable checkpoint of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: *self.grid.cells(),
            score: self.score,
            won: self.won,
            over: self.over,
            move_count: self.move_count,
            rng: self.rng.state(),
        }
    }

    /// Slide and merge all tiles in `direction`.
    ///
    /// Returns true iff at least one cell changed. Only then is the new
    /// grid committed, the score increased by the merge points, one tile
    /// spawned, and win/terminal status re-evaluated. A blocked move
    /// leaves grid, score, flags, and history untouched.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let mut cells = *self.grid.cells();
        let gained = apply_shift(&mut cells, direction);

        if cells == *self.grid.cells() {
            trace!("shift {} blocked", direction);
            return false;
        }

        self.grid = Grid::from_cells(cells);
        self.score += gained;
        self.move_count += 1;

        let spawn = self.spawn_tile();

        if !self.won && self.grid.contains(WIN_TILE) {
            self.won = true;
            debug!("reached {} on move {}", WIN_TILE, self.move_count);
        }
        if self.grid.is_terminal() {
            self.over = true;
            debug!(
                "no moves left after move {}, final score {}",
                self.move_count, self.score
            );
        }

        self.history.push_back(MoveRecord {
            direction,
            gained,
            spawn,
            move_number: self.move_count,
        });
        trace!("shift {} gained {}", direction, gained);
        true
    }

    /// True if a shift in `direction` would change the grid.
    ///
    /// Pure lookahead; does not spawn, score, or touch flags.
    #[must_use]
    pub fn can_shift(&self, direction: Direction) -> bool {
        let mut cells = *self.grid.cells();
        apply_shift(&mut cells, direction);
        cells != *self.grid.cells()
    }

    /// The board, as a read-only view.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The accumulated score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// True once a 2048 tile has been formed. Sticky.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// True once the board was terminal after a move. Sticky.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// All accepted moves this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of accepted moves this session.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// Called at construction and after a verified grid change, so an
    /// empty cell always exists; an empty board here is a caller bug.
    fn spawn_tile(&mut self) -> SpawnRecord {
        let value = if self.rng.gen_range(0..10) < 9 { 2 } else { 4 };

        let empties = self.grid.empty_cells();
        let cell = *self
            .rng
            .choose(&empties)
            .expect("spawn requires an empty cell");

        let mut cells = *self.grid.cells();
        cells[cell as usize] = value;
        self.grid = Grid::from_cells(cells);

        trace!("spawned {} at cell {}", value, cell);
        SpawnRecord { cell, value }
    }
}

/// Run the line pass over every row or column of `direction`, in place.
///
/// Returns the total points gained across all four lines.
fn apply_shift(cells: &mut [u32; CELL_COUNT], direction: Direction) -> u64 {
    let mut gained = 0;
    for line in 0..GRID_SIZE {
        let indices = direction.line_indices(line);
        let mut extracted = indices.map(|i| cells[i]);
        gained += slide_line(&mut extracted);
        for (value, idx) in extracted.iter().zip(indices) {
            cells[idx] = *value;
        }
    }
    gained
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "{}", self.grid)
    }
}

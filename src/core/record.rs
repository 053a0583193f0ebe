//! Per-move history records.
//!
//! Every accepted move appends one [`MoveRecord`] to the game's history:
//! the direction, the points the merges earned, and the tile the engine
//! spawned afterwards. Blocked moves record nothing.
//!
//! History is a record for replay and debugging. Nothing reads it back to
//! rewind state; undo stays out of the engine.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// The tile placed after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRecord {
    /// Flat row-major cell index the tile landed in.
    pub cell: u8,

    /// The spawned value, 2 or 4.
    pub value: u32,
}

/// A recorded move with its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The direction that was played.
    pub direction: Direction,

    /// Points earned by merges in this move.
    pub gained: u64,

    /// The tile spawned after the grid changed.
    pub spawn: SpawnRecord,

    /// 1-based move number within the session.
    pub move_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields() {
        let record = MoveRecord {
            direction: Direction::Left,
            gained: 12,
            spawn: SpawnRecord { cell: 7, value: 2 },
            move_number: 3,
        };

        assert_eq!(record.direction, Direction::Left);
        assert_eq!(record.gained, 12);
        assert_eq!(record.spawn.cell, 7);
        assert_eq!(record.spawn.value, 2);
        assert_eq!(record.move_number, 3);
    }

    #[test]
    fn test_record_serialization() {
        let record = MoveRecord {
            direction: Direction::Down,
            gained: 4,
            spawn: SpawnRecord { cell: 0, value: 4 },
            move_number: 1,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}

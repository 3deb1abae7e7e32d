//! The per-round movement decision emitted for each elevator.

use std::fmt;

use crate::Floor;

/// One round's movement for a single elevator.
///
/// Emitted once per elevator per round by a movement policy and applied
/// uniformly by the engine.  The contract: `Up` is forbidden at the top floor
/// and `Down` is forbidden at the ground floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Stay,
}

impl Direction {
    /// Signed floor delta: +1, -1, or 0.
    #[inline]
    pub fn delta(self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Stay => 0,
        }
    }

    /// `true` if this direction may be taken from `floor` in a building whose
    /// highest floor is `top_floor`.
    #[inline]
    pub fn is_valid_at(self, floor: Floor, top_floor: Floor) -> bool {
        match self {
            Direction::Up => floor < top_floor,
            Direction::Down => floor > Floor::GROUND,
            Direction::Stay => true,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Stay => "stay",
        };
        f.write_str(s)
    }
}

//! Building floors and single-step floor arithmetic.
//!
//! Floors are numbered from 1 (the ground floor) up to the building's top
//! floor.  All movement in the simulation is one floor per round, so the only
//! arithmetic needed is "which way is `target` from here" and "one step in
//! that direction".

use std::cmp::Ordering;
use std::fmt;

use crate::Direction;

/// A 1-based building floor.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor.  Elevators start here; nothing lies below it.
    pub const GROUND: Floor = Floor(1);

    /// Absolute distance to `other`, in floors.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The direction of a single step toward `target` (`Stay` if already there).
    #[inline]
    pub fn direction_toward(self, target: Floor) -> Direction {
        match self.0.cmp(&target.0) {
            Ordering::Less => Direction::Up,
            Ordering::Greater => Direction::Down,
            Ordering::Equal => Direction::Stay,
        }
    }

    /// The floor one step away in `direction`.
    ///
    /// # Panics
    /// Panics in debug mode when stepping `Down` from the ground floor; the
    /// movement contract never emits that direction here.
    #[inline]
    pub fn stepped(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up => Floor(self.0 + 1),
            Direction::Down => {
                debug_assert!(self.0 > 1, "cannot step below the ground floor");
                Floor(self.0 - 1)
            }
            Direction::Stay => self,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

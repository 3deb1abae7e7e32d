//! Simulation time: the round counter.
//!
//! Time is a monotonically increasing `Round` counter; one round is one full
//! pass of the engine's four stages (arrivals, disembark, board, move).
//! There is no wall-clock mapping — rounds are the only time unit the
//! simulation knows about, so all schedule arithmetic is exact integer math.

use std::fmt;

/// An absolute simulation round counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Round {
        Round(self.0 + n)
    }
}

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl std::ops::Sub for Round {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Round) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

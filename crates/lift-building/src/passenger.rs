//! Passengers: units of demand with wait-time accounting.

use lift_core::{Floor, PassengerId};

/// A person travelling from `start` to `target`.
///
/// Created by the engine (from an arrival model's trip) with zero wait; the
/// wait counter goes up by one at the end of every round the passenger is
/// still in the system, so a passenger never accrues wait in the round it
/// departs.
///
/// Invariants: `start != target` at creation; `wait_rounds` never decreases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    /// Admission-order id, issued by the engine.
    pub id: PassengerId,

    /// The floor this passenger arrived on.
    pub start: Floor,

    /// The floor this passenger wants to reach.
    pub target: Floor,

    wait_rounds: u32,
}

impl Passenger {
    pub fn new(id: PassengerId, start: Floor, target: Floor) -> Self {
        debug_assert_ne!(start, target, "a trip must span at least one floor");
        Self { id, start, target, wait_rounds: 0 }
    }

    /// Rounds elapsed since arrival, excluding the round of departure.
    #[inline]
    pub fn wait_rounds(&self) -> u32 {
        self.wait_rounds
    }

    /// Add one round of waiting.
    #[inline]
    pub fn bump_wait(&mut self) {
        self.wait_rounds += 1;
    }

    /// Banding of wait time into anger levels 0–4.
    ///
    /// Informational only — nothing in the round loop reads it.  Presentation
    /// layers use it to pick how irritated a passenger should look.
    pub fn anger_level(&self) -> u8 {
        match self.wait_rounds {
            0..=2 => 0,
            3..=4 => 1,
            5..=6 => 2,
            7..=8 => 3,
            _ => 4,
        }
    }
}

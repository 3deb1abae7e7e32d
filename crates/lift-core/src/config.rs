//! Run configuration and its preconditions.

use crate::{Floor, LiftError, LiftResult, Round};

/// Top-level simulation configuration.
///
/// Assembled in code by the application (there is no config-file layer) and
/// validated once when the simulation is built.  The arrival model and the
/// movement policy are injected separately — they carry their own parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  At least 2 — with a single floor no
    /// trip can have distinct start and target.
    pub num_floors: u32,

    /// Number of elevators in the fleet.  At least 1.
    pub num_elevators: u32,

    /// Capacity of every elevator, in passengers.  At least 1.
    pub elevator_capacity: u32,

    /// Total rounds to simulate.  At least 1.
    pub num_rounds: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The highest floor of the building.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors)
    }

    /// The round at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_round(&self) -> Round {
        Round(self.num_rounds)
    }

    /// Check all preconditions.  Violations fail fast at build time; nothing
    /// recovers from a bad configuration.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::InvalidConfig {
                field: "num_floors",
                value: self.num_floors as u64,
                min:   2,
            });
        }
        if self.num_elevators < 1 {
            return Err(LiftError::InvalidConfig {
                field: "num_elevators",
                value: self.num_elevators as u64,
                min:   1,
            });
        }
        if self.elevator_capacity < 1 {
            return Err(LiftError::InvalidConfig {
                field: "elevator_capacity",
                value: self.elevator_capacity as u64,
                min:   1,
            });
        }
        if self.num_rounds < 1 {
            return Err(LiftError::InvalidConfig {
                field: "num_rounds",
                value: self.num_rounds,
                min:   1,
            });
        }
        Ok(())
    }
}

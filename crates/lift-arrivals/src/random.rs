//! Uniform random demand.

use lift_core::{Floor, Round, SimRng};

use crate::{ArrivalModel, Trip};

/// Generate a fixed number of random trips each round.
///
/// Start floors are sampled *without replacement* — at most one new passenger
/// appears per floor per round — so `per_round` is clamped to the floor count
/// at construction.  Each target is drawn uniformly over the building and
/// redrawn until it differs from its start.  `per_round = None` produces no
/// arrivals at all.
pub struct RandomArrivals {
    top_floor: Floor,
    per_round: Option<u32>,
}

impl RandomArrivals {
    pub fn new(top_floor: Floor, per_round: Option<u32>) -> Self {
        let per_round = per_round.map(|n| n.min(top_floor.0));
        Self { top_floor, per_round }
    }

    /// Arrivals per round after clamping, or `None` for a silent model.
    pub fn per_round(&self) -> Option<u32> {
        self.per_round
    }
}

impl ArrivalModel for RandomArrivals {
    fn arrivals(&self, _round: Round, rng: &mut SimRng) -> Vec<Trip> {
        let Some(count) = self.per_round else {
            return vec![];
        };

        let starts =
            rand::seq::index::sample(rng.inner(), self.top_floor.0 as usize, count as usize);

        starts
            .iter()
            .map(|i| {
                let start = Floor(i as u32 + 1);
                let mut target = Floor(rng.gen_range(1..=self.top_floor.0));
                while target == start {
                    target = Floor(rng.gen_range(1..=self.top_floor.0));
                }
                Trip { start, target }
            })
            .collect()
    }
}

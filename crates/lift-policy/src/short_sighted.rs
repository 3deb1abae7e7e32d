//! Nearest-request movement.

use lift_building::Elevator;
use lift_core::{Direction, Floor, SimRng};

use crate::{MovementPolicy, PolicyContext};

/// Always chase the closest thing.
///
/// Empty car: one step toward the *nearest* floor with somebody waiting (by
/// absolute distance, ties toward the lower floor); stay put if nobody waits.
/// Occupied car: one step toward the nearest onboard target, ties again
/// toward the lower floor.  Boarding order is irrelevant to this policy.
pub struct ShortSighted;

impl MovementPolicy for ShortSighted {
    fn name(&self) -> &'static str {
        "short-sighted"
    }

    fn decide(
        &self,
        elevator: &Elevator,
        ctx:      &PolicyContext<'_>,
        _rng:     &mut SimRng,
    ) -> Direction {
        let here = elevator.floor();

        if elevator.is_empty() {
            return match ctx.waiting.nearest_occupied_floor(here) {
                Some(floor) => here.direction_toward(floor),
                None => Direction::Stay,
            };
        }

        // Nearest onboard target; only a strictly shorter distance or an
        // equal-distance lower floor displaces the current best.
        let mut best: Option<(u32, Floor)> = None;
        for passenger in elevator.passengers() {
            let d = here.distance_to(passenger.target);
            match best {
                Some((best_d, best_f)) if d > best_d || (d == best_d && passenger.target >= best_f) => {}
                _ => best = Some((d, passenger.target)),
            }
        }

        match best {
            Some((_, floor)) => here.direction_toward(floor),
            // Unreachable: the car is occupied on this path.
            None => Direction::Stay,
        }
    }
}

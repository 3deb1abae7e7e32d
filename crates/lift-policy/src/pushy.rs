//! First-boarder-priority movement.

use lift_building::Elevator;
use lift_core::{Direction, SimRng};

use crate::{MovementPolicy, PolicyContext};

/// The first passenger to board rules the car.
///
/// Empty car: one step toward the *lowest* floor with somebody waiting; stay
/// put if nobody waits anywhere.  Occupied car: one step toward the first
/// boarder's target, ignoring every other passenger — and only that first
/// boarder may leave, at its own target floor.
pub struct PushyPassenger;

impl MovementPolicy for PushyPassenger {
    fn name(&self) -> &'static str {
        "pushy-passenger"
    }

    fn decide(
        &self,
        elevator: &Elevator,
        ctx:      &PolicyContext<'_>,
        _rng:     &mut SimRng,
    ) -> Direction {
        match elevator.passengers().first() {
            Some(head) => elevator.floor().direction_toward(head.target),
            None => match ctx.waiting.lowest_occupied_floor() {
                Some(floor) => elevator.floor().direction_toward(floor),
                None => Direction::Stay,
            },
        }
    }

    fn disembark_eligible(&self, elevator: &Elevator, idx: usize) -> bool {
        idx == 0 && elevator.passengers()[idx].target == elevator.floor()
    }
}

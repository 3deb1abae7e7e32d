//! Uniformly random movement.

use lift_building::Elevator;
use lift_core::{Direction, SimRng};

use crate::{MovementPolicy, PolicyContext};

/// Pick a uniformly random *valid* direction for each elevator.
///
/// Draws from {down, stay, up} and redraws until the result is valid at the
/// elevator's floor, so the valid directions stay equally likely at the
/// boundaries.  Ignores passengers and waiting demand entirely.
pub struct RandomPolicy;

impl MovementPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(
        &self,
        elevator: &Elevator,
        ctx:      &PolicyContext<'_>,
        rng:      &mut SimRng,
    ) -> Direction {
        loop {
            let direction = match rng.gen_range(-1..=1i8) {
                -1 => Direction::Down,
                0 => Direction::Stay,
                _ => Direction::Up,
            };
            if direction.is_valid_at(elevator.floor(), ctx.top_floor) {
                return direction;
            }
        }
    }
}

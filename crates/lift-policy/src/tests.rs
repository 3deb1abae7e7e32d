//! Unit tests for the three movement policies.

use lift_building::{Elevator, Passenger, WaitingRegistry};
use lift_core::{Direction, Floor, PassengerId, SimRng};

use crate::{MovementPolicy, PolicyContext, PushyPassenger, RandomPolicy, ShortSighted};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn passenger(id: u64, start: u32, target: u32) -> Passenger {
    Passenger::new(PassengerId(id), Floor(start), Floor(target))
}

fn elevator_at(floor: u32, capacity: usize) -> Elevator {
    let mut e = Elevator::new(capacity);
    e.set_floor(Floor(floor));
    e
}

fn waiting_on(floors: &[u32]) -> WaitingRegistry {
    let mut reg = WaitingRegistry::new();
    for (i, &floor) in floors.iter().enumerate() {
        // Target is irrelevant to movement decisions for waiters; pick any
        // other floor.
        let target = if floor == 1 { 2 } else { 1 };
        reg.push(Floor(floor), passenger(i as u64, floor, target));
    }
    reg
}

#[cfg(test)]
mod random_tests {
    use super::*;

    #[test]
    fn never_down_at_ground() {
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(6));
        let e = elevator_at(1, 1);
        let mut rng = SimRng::new(42);
        for _ in 0..500 {
            assert_ne!(RandomPolicy.decide(&e, &ctx, &mut rng), Direction::Down);
        }
    }

    #[test]
    fn never_up_at_top() {
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(6));
        let e = elevator_at(6, 1);
        let mut rng = SimRng::new(42);
        for _ in 0..500 {
            assert_ne!(RandomPolicy.decide(&e, &ctx, &mut rng), Direction::Up);
        }
    }

    #[test]
    fn mid_building_reaches_all_directions() {
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(6));
        let e = elevator_at(3, 1);
        let mut rng = SimRng::new(42);
        let mut seen = [false; 3];
        for _ in 0..500 {
            match RandomPolicy.decide(&e, &ctx, &mut rng) {
                Direction::Up => seen[0] = true,
                Direction::Down => seen[1] = true,
                Direction::Stay => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true], "all three directions should occur");
    }

    #[test]
    fn default_eligibility_frees_anyone_at_target() {
        let mut e = elevator_at(3, 2);
        e.board(passenger(0, 1, 3));
        e.board(passenger(1, 1, 5));
        assert!(RandomPolicy.disembark_eligible(&e, 0));
        assert!(!RandomPolicy.disembark_eligible(&e, 1));
    }
}

#[cfg(test)]
mod pushy_tests {
    use super::*;

    #[test]
    fn empty_car_heads_for_lowest_waiting_floor() {
        let reg = waiting_on(&[5, 2]);
        let ctx = PolicyContext::new(&reg, Floor(6));
        let e = elevator_at(4, 1);
        let mut rng = SimRng::new(0);
        assert_eq!(PushyPassenger.decide(&e, &ctx, &mut rng), Direction::Down);
    }

    #[test]
    fn empty_car_stays_when_nobody_waits() {
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(6));
        let e = elevator_at(4, 1);
        let mut rng = SimRng::new(0);
        assert_eq!(PushyPassenger.decide(&e, &ctx, &mut rng), Direction::Stay);
    }

    #[test]
    fn empty_car_stays_on_the_demand_floor() {
        let reg = waiting_on(&[4]);
        let ctx = PolicyContext::new(&reg, Floor(6));
        let e = elevator_at(4, 1);
        let mut rng = SimRng::new(0);
        assert_eq!(PushyPassenger.decide(&e, &ctx, &mut rng), Direction::Stay);
    }

    #[test]
    fn occupied_car_follows_first_boarder_only() {
        let mut e = elevator_at(4, 2);
        e.board(passenger(0, 1, 2)); // first boarder wants down
        e.board(passenger(1, 1, 6)); // second wants up — ignored
        let reg = waiting_on(&[6]);
        let ctx = PolicyContext::new(&reg, Floor(6));
        let mut rng = SimRng::new(0);
        assert_eq!(PushyPassenger.decide(&e, &ctx, &mut rng), Direction::Down);
    }

    #[test]
    fn only_head_of_list_may_leave() {
        // Car at floor 3 with [P1(target 3), P2(target 5)] — only P1 leaves.
        let mut e = elevator_at(3, 2);
        e.board(passenger(1, 1, 3));
        e.board(passenger(2, 1, 5));
        assert!(PushyPassenger.disembark_eligible(&e, 0));
        assert!(!PushyPassenger.disembark_eligible(&e, 1));
    }

    #[test]
    fn head_stays_put_away_from_its_target() {
        // Head's target is elsewhere: nobody leaves, even a non-head whose
        // target is the current floor.
        let mut e = elevator_at(5, 2);
        e.board(passenger(1, 1, 3));
        e.board(passenger(2, 1, 5));
        assert!(!PushyPassenger.disembark_eligible(&e, 0));
        assert!(!PushyPassenger.disembark_eligible(&e, 1));
    }
}

#[cfg(test)]
mod short_sighted_tests {
    use super::*;

    #[test]
    fn empty_car_heads_for_nearest_waiting_floor() {
        // Floor 4, waiting at {2, 7}: distance 2 beats distance 3 → down.
        let reg = waiting_on(&[2, 7]);
        let ctx = PolicyContext::new(&reg, Floor(8));
        let e = elevator_at(4, 1);
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Down);
    }

    #[test]
    fn nearest_tie_goes_to_lower_floor() {
        let reg = waiting_on(&[3, 5]);
        let ctx = PolicyContext::new(&reg, Floor(8));
        let e = elevator_at(4, 1);
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Down);
    }

    #[test]
    fn empty_car_stays_when_nobody_waits() {
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(8));
        let e = elevator_at(4, 1);
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Stay);
    }

    #[test]
    fn occupied_car_chases_nearest_target() {
        let mut e = elevator_at(4, 3);
        e.board(passenger(0, 1, 8)); // distance 4
        e.board(passenger(1, 1, 5)); // distance 1 — nearest
        e.board(passenger(2, 1, 1)); // distance 3
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(8));
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Up);
    }

    #[test]
    fn onboard_tie_goes_to_lower_target() {
        let mut e = elevator_at(4, 2);
        e.board(passenger(0, 1, 5)); // distance 1
        e.board(passenger(1, 1, 3)); // distance 1, lower target — wins
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(8));
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Down);
    }

    #[test]
    fn parks_on_a_passenger_target_floor() {
        let mut e = elevator_at(5, 2);
        e.board(passenger(0, 1, 5));
        let reg = WaitingRegistry::new();
        let ctx = PolicyContext::new(&reg, Floor(8));
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Stay);
    }

    #[test]
    fn anyone_at_target_may_leave() {
        let mut e = elevator_at(3, 2);
        e.board(passenger(0, 1, 5));
        e.board(passenger(1, 1, 3));
        assert!(!ShortSighted.disembark_eligible(&e, 0));
        assert!(ShortSighted.disembark_eligible(&e, 1));
    }

    #[test]
    fn waiting_demand_ignored_while_occupied() {
        // Somebody waits next door at floor 5, but the onboard target at
        // floor 2 is what counts.
        let mut e = elevator_at(4, 1);
        e.board(passenger(0, 1, 2));
        let reg = waiting_on(&[5]);
        let ctx = PolicyContext::new(&reg, Floor(8));
        let mut rng = SimRng::new(0);
        assert_eq!(ShortSighted.decide(&e, &ctx, &mut rng), Direction::Down);
    }
}

//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, PassengerId};

    #[test]
    fn index_cast() {
        assert_eq!(ElevatorId(3).index(), 3);
        assert_eq!(PassengerId(7).index(), 7);
    }

    #[test]
    fn ordering() {
        assert!(ElevatorId(0) < ElevatorId(1));
        assert!(PassengerId(100) > PassengerId(99));
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(2).to_string(), "ElevatorId(2)");
        assert_eq!(PassengerId(41).to_string(), "PassengerId(41)");
    }
}

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor};

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(Floor(2).distance_to(Floor(7)), 5);
        assert_eq!(Floor(7).distance_to(Floor(2)), 5);
        assert_eq!(Floor(4).distance_to(Floor(4)), 0);
    }

    #[test]
    fn direction_toward_target() {
        assert_eq!(Floor(1).direction_toward(Floor(5)), Direction::Up);
        assert_eq!(Floor(5).direction_toward(Floor(1)), Direction::Down);
        assert_eq!(Floor(3).direction_toward(Floor(3)), Direction::Stay);
    }

    #[test]
    fn stepped_moves_one_floor() {
        assert_eq!(Floor(3).stepped(Direction::Up), Floor(4));
        assert_eq!(Floor(3).stepped(Direction::Down), Floor(2));
        assert_eq!(Floor(3).stepped(Direction::Stay), Floor(3));
    }

    #[test]
    fn display() {
        assert_eq!(Floor(12).to_string(), "F12");
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, Floor};

    #[test]
    fn deltas() {
        assert_eq!(Direction::Up.delta(), 1);
        assert_eq!(Direction::Down.delta(), -1);
        assert_eq!(Direction::Stay.delta(), 0);
    }

    #[test]
    fn up_invalid_at_top() {
        let top = Floor(6);
        assert!(!Direction::Up.is_valid_at(top, top));
        assert!(Direction::Up.is_valid_at(Floor(5), top));
    }

    #[test]
    fn down_invalid_at_ground() {
        let top = Floor(6);
        assert!(!Direction::Down.is_valid_at(Floor::GROUND, top));
        assert!(Direction::Down.is_valid_at(Floor(2), top));
    }

    #[test]
    fn stay_always_valid() {
        let top = Floor(6);
        assert!(Direction::Stay.is_valid_at(Floor::GROUND, top));
        assert!(Direction::Stay.is_valid_at(top, top));
    }
}

#[cfg(test)]
mod round {
    use crate::Round;

    #[test]
    fn arithmetic() {
        let r = Round(10);
        assert_eq!(r + 5, Round(15));
        assert_eq!(r.offset(3), Round(13));
        assert_eq!(Round(15) - Round(10), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Round(4).to_string(), "R4");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.gen_range(0..u64::MAX);
            let b: u64 = r2.gen_range(0..u64::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn child_streams_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y, "sibling child streams should diverge");
    }

    #[test]
    fn child_streams_reproducible() {
        let mut r1 = SimRng::new(99);
        let mut r2 = SimRng::new(99);
        let mut c1 = r1.child(7);
        let mut c2 = r2.child(7);
        for _ in 0..50 {
            assert_eq!(c1.gen_range(0..1000u32), c2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(1..=10u32);
            assert!((1..=10).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{Floor, LiftError, Round, SimConfig};

    fn valid() -> SimConfig {
        SimConfig {
            num_floors:        6,
            num_elevators:     2,
            elevator_capacity: 3,
            num_rounds:        15,
            seed:              42,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().top_floor(), Floor(6));
        assert_eq!(valid().end_round(), Round(15));
    }

    #[test]
    fn single_floor_rejected() {
        let cfg = SimConfig { num_floors: 1, ..valid() };
        match cfg.validate() {
            Err(LiftError::InvalidConfig { field, value, min }) => {
                assert_eq!(field, "num_floors");
                assert_eq!(value, 1);
                assert_eq!(min, 2);
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn zero_elevators_rejected() {
        let cfg = SimConfig { num_elevators: 0, ..valid() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = SimConfig { elevator_capacity: 0, ..valid() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_rounds_rejected() {
        let cfg = SimConfig { num_rounds: 0, ..valid() };
        assert!(cfg.validate().is_err());
    }
}

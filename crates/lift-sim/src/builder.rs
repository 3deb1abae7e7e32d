//! Fluent builder for constructing a [`Sim`].

use lift_arrivals::ArrivalModel;
use lift_building::{Elevator, WaitingRegistry};
use lift_core::{Round, SimConfig, SimRng};
use lift_policy::MovementPolicy;

use crate::sim::{ARRIVALS_STREAM, MOVEMENT_STREAM};
use crate::{Sim, SimResult};

/// Validating builder for [`Sim<A, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — building geometry, fleet size, rounds, seed
/// - `A: ArrivalModel` — where demand comes from
/// - `P: MovementPolicy` — how the fleet moves
///
/// `build` checks every configuration precondition and assembles the initial
/// state: `num_elevators` empty cars of `elevator_capacity`, all parked at
/// the ground floor, with an empty waiting registry.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, RandomArrivals::new(top, Some(2)), ShortSighted)
///     .build()?;
/// let stats = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<A: ArrivalModel, P: MovementPolicy> {
    config:   SimConfig,
    arrivals: A,
    policy:   P,
}

impl<A: ArrivalModel, P: MovementPolicy> SimBuilder<A, P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, arrivals: A, policy: P) -> Self {
        Self { config, arrivals, policy }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<A, P>> {
        self.config.validate()?;

        let elevators: Vec<Elevator> = (0..self.config.num_elevators)
            .map(|_| Elevator::new(self.config.elevator_capacity as usize))
            .collect();

        // One master seed, one derived stream per stochastic component.
        let mut root = SimRng::new(self.config.seed);
        let arrivals_rng = root.child(ARRIVALS_STREAM);
        let movement_rng = root.child(MOVEMENT_STREAM);

        log::debug!(
            "built sim: {} floors, {} elevators (capacity {}), {} rounds, policy {}",
            self.config.num_floors,
            self.config.num_elevators,
            self.config.elevator_capacity,
            self.config.num_rounds,
            self.policy.name(),
        );

        Ok(Sim {
            config: self.config,
            elevators,
            waiting: WaitingRegistry::new(),
            arrivals: self.arrivals,
            policy: self.policy,
            arrivals_rng,
            movement_rng,
            round: Round::ZERO,
            admitted: 0,
            completed_waits: Vec::new(),
        })
    }
}

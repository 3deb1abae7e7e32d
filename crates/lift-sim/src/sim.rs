//! The `Sim` struct and its round loop.

use lift_arrivals::ArrivalModel;
use lift_building::{Elevator, Passenger, WaitingRegistry};
use lift_core::{Direction, ElevatorId, Floor, PassengerId, Round, SimConfig, SimRng};
use lift_policy::{MovementPolicy, PolicyContext};

use crate::{RunStats, SimError, SimObserver, SimResult};

// ── RNG stream offsets ────────────────────────────────────────────────────────

/// Child-stream offset for arrival generation.
pub(crate) const ARRIVALS_STREAM: u64 = 0;
/// Child-stream offset for movement decisions.
pub(crate) const MOVEMENT_STREAM: u64 = 1;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<A, P>` holds all run state and drives the four-stage round loop:
///
/// 1. **Arrivals**: the arrival model produces this round's trips (it sees
///    the 1-indexed round number); each trip is admitted as a passenger and
///    queued on its start floor.
/// 2. **Disembark**: per elevator, passengers for which
///    [`MovementPolicy::disembark_eligible`] holds leave the car; their final
///    wait times go into the completed-trip list.
/// 3. **Board**: per elevator, waiters at the car's floor board in arrival
///    order until the car is full or the queue runs dry.
/// 4. **Move**: [`MovementPolicy::decide`] once per elevator in fleet order
///    (pure), then the engine applies every direction, checking the bounds
///    contract.
///
/// After stage 4, every passenger still waiting or onboard accrues one round
/// of wait.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: ArrivalModel, P: MovementPolicy> {
    /// Global configuration (floors, fleet size, rounds, seed).
    pub config: SimConfig,

    /// The fleet, indexed by `ElevatorId`.
    pub elevators: Vec<Elevator>,

    /// Who is waiting on which floor.
    pub waiting: WaitingRegistry,

    /// Where each round's demand comes from.
    pub arrivals: A,

    /// The movement policy driving the fleet.
    pub policy: P,

    /// RNG stream consumed by the arrival model.
    pub(crate) arrivals_rng: SimRng,

    /// RNG stream consumed by movement decisions.
    pub(crate) movement_rng: SimRng,

    /// The next round to execute.
    pub(crate) round: Round,

    /// Passengers admitted so far; doubles as the id source.
    pub(crate) admitted: u64,

    /// Final wait times of completed trips, in completion order.
    pub(crate) completed_waits: Vec<u32>,
}

impl<A: ArrivalModel, P: MovementPolicy> Sim<A, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current round to `config.end_round()` and
    /// summarize it.
    ///
    /// Calls observer hooks at every stage boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunStats> {
        while self.round < self.config.end_round() {
            let now = self.round;
            observer.on_round_start(now);
            self.process_round(now, observer)?;
            observer.on_round_end(now);
            self.round = now + 1;
        }
        let stats = self.stats_so_far();
        observer.on_run_end(&stats);
        Ok(stats)
    }

    /// Run exactly `n` rounds from the current position (ignores
    /// `end_round`).
    ///
    /// Useful for tests and incremental stepping; no statistics are emitted —
    /// call [`stats_so_far`][Self::stats_so_far] when you want a snapshot.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.round;
            observer.on_round_start(now);
            self.process_round(now, observer)?;
            observer.on_round_end(now);
            self.round = now + 1;
        }
        Ok(())
    }

    /// Statistics over the rounds executed so far.
    pub fn stats_so_far(&self) -> RunStats {
        RunStats::from_waits(self.round.0, self.admitted, &self.completed_waits)
    }

    /// Passengers admitted so far.
    pub fn admitted(&self) -> u64 {
        self.admitted
    }

    /// Completed trips so far.
    pub fn completed(&self) -> u64 {
        self.completed_waits.len() as u64
    }

    /// Passengers currently onboard across the whole fleet.
    pub fn onboard(&self) -> usize {
        self.elevators.iter().map(|e| e.passengers().len()).sum()
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn process_round<O: SimObserver>(&mut self, now: Round, observer: &mut O) -> SimResult<()> {
        log::debug!(
            "=== {now} | policy {} | {} waiting, {} onboard ===",
            self.policy.name(),
            self.waiting.len(),
            self.onboard(),
        );

        self.admit_arrivals(now, observer);
        self.disembark(now, observer);
        self.board(now, observer);
        self.move_fleet(now, observer)?;

        // Wait accrues only for passengers still in the system — never in
        // the round a passenger departed.
        self.waiting.bump_all_waits();
        for elevator in &mut self.elevators {
            for passenger in elevator.passengers_mut() {
                passenger.bump_wait();
            }
        }
        Ok(())
    }

    // ── Stage 1: arrivals ─────────────────────────────────────────────────

    /// Collect this round's trips and merge them into the registry.
    ///
    /// Admission is two-pass: build the full batch (assigning ids and
    /// counting), notify the observer, then append queue by queue.
    fn admit_arrivals<O: SimObserver>(&mut self, now: Round, observer: &mut O) {
        // The arrival model sees 1-indexed rounds.
        let trips = self.arrivals.arrivals(now + 1, &mut self.arrivals_rng);
        if trips.is_empty() {
            return;
        }

        let batch: Vec<(Floor, Passenger)> = trips
            .into_iter()
            .map(|trip| {
                let id = PassengerId(self.admitted);
                self.admitted += 1;
                (trip.start, Passenger::new(id, trip.start, trip.target))
            })
            .collect();

        log::trace!("{now}: {} new arrivals", batch.len());
        observer.on_arrivals(now, &batch);

        for (floor, passenger) in batch {
            self.waiting.push(floor, passenger);
        }
    }

    // ── Stage 2: disembark ────────────────────────────────────────────────

    /// Let eligible passengers out.
    ///
    /// Eligibility is judged against the pre-removal list, so a policy that
    /// frees only the head of the list releases at most one passenger per
    /// round.  Removals then run front to back with shifted indices, keeping
    /// observer events in boarding order.
    fn disembark<O: SimObserver>(&mut self, now: Round, observer: &mut O) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let policy = &self.policy;
        let completed = &mut self.completed_waits;

        for (i, elevator) in self.elevators.iter_mut().enumerate() {
            let id = ElevatorId(i as u32);
            let leaving: Vec<usize> = (0..elevator.passengers().len())
                .filter(|&idx| policy.disembark_eligible(elevator, idx))
                .collect();

            for (removed, &idx) in leaving.iter().enumerate() {
                let passenger = elevator.remove(idx - removed);
                log::trace!(
                    "{now}: {} leaves {id} at {} after {} rounds",
                    passenger.id,
                    elevator.floor(),
                    passenger.wait_rounds(),
                );
                completed.push(passenger.wait_rounds());
                observer.on_disembark(now, id, &passenger);
            }
        }
    }

    // ── Stage 3: board ────────────────────────────────────────────────────

    /// Fill each elevator from the queue at its floor, in arrival order.
    fn board<O: SimObserver>(&mut self, now: Round, observer: &mut O) {
        let waiting = &mut self.waiting;

        for (i, elevator) in self.elevators.iter_mut().enumerate() {
            let id = ElevatorId(i as u32);
            while !elevator.is_full() {
                let Some(passenger) = waiting.pop_front(elevator.floor()) else {
                    break;
                };
                log::trace!("{now}: {} boards {id} at {}", passenger.id, elevator.floor());
                observer.on_board(now, id, &passenger);
                elevator.board(passenger);
            }
        }
    }

    // ── Stage 4: move ─────────────────────────────────────────────────────

    /// Decide (pure, per elevator, fleet order), then apply (uniform).
    ///
    /// A direction that is invalid at the elevator's floor breaks the
    /// movement contract; that is an internal invariant failure and aborts
    /// the run.
    fn move_fleet<O: SimObserver>(&mut self, now: Round, observer: &mut O) -> SimResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let policy = &self.policy;
        let rng = &mut self.movement_rng;
        let top_floor = self.config.top_floor();
        let ctx = PolicyContext::new(&self.waiting, top_floor);

        let directions: Vec<Direction> = self
            .elevators
            .iter()
            .map(|elevator| policy.decide(elevator, &ctx, rng))
            .collect();

        for (i, (elevator, &direction)) in self.elevators.iter_mut().zip(&directions).enumerate() {
            if !direction.is_valid_at(elevator.floor(), top_floor) {
                return Err(SimError::InvalidDirection {
                    elevator: ElevatorId(i as u32),
                    floor: elevator.floor(),
                    direction,
                });
            }
            elevator.set_floor(elevator.floor().stepped(direction));
        }

        observer.on_moves(now, &directions);
        Ok(())
    }
}

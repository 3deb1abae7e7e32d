//! Simulation observer trait for presentation layers and data collection.

use lift_building::Passenger;
use lift_core::{Direction, ElevatorId, Floor, Round};

use crate::RunStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// round loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every borrow handed out is read-only;
/// the engine's correctness never depends on an observer being present.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_moves(&mut self, round: Round, directions: &[Direction]) {
///         println!("{round}: fleet moved {directions:?}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before any processing.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after the arrival stage with this round's new passengers (and
    /// the floors they appeared on), before they join the waiting registry.
    fn on_arrivals(&mut self, _round: Round, _arrivals: &[(Floor, Passenger)]) {}

    /// Called once per passenger stepping onto an elevator.
    fn on_board(&mut self, _round: Round, _elevator: ElevatorId, _passenger: &Passenger) {}

    /// Called once per passenger leaving an elevator at its target floor.
    fn on_disembark(&mut self, _round: Round, _elevator: ElevatorId, _passenger: &Passenger) {}

    /// Called after the move stage with the directions taken, in fleet order.
    fn on_moves(&mut self, _round: Round, _directions: &[Direction]) {}

    /// Called at the end of each round, after wait times were updated.
    fn on_round_end(&mut self, _round: Round) {}

    /// Called once after the final round completes.
    fn on_run_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

//! The `MovementPolicy` trait — the main extension point for fleet behavior.

use lift_building::Elevator;
use lift_core::{Direction, SimRng};

use crate::PolicyContext;

/// Pluggable per-round elevator movement.
///
/// One policy instance drives the whole fleet: the engine calls
/// [`decide`][Self::decide] once per elevator per round, in fleet order, and
/// applies the returned directions itself.  Policies are evaluated
/// independently per elevator — a decision may read the shared waiting
/// registry but never sees the directions chosen for other cars.
///
/// # Contract
///
/// `decide` must never return `Up` when the elevator is at the top floor, nor
/// `Down` at the ground floor.  The engine treats a violation as an internal
/// invariant failure and aborts the run.
///
/// # Disembark eligibility
///
/// Which passengers may leave at the current floor is policy-specific (the
/// pushy-passenger policy only ever lets its first boarder out), so it is
/// part of this trait.  The default rule frees any passenger whose target is
/// the current floor.
pub trait MovementPolicy: Send + Sync + 'static {
    /// Short lowercase name for logging.
    fn name(&self) -> &'static str;

    /// One movement decision for `elevator` this round.
    fn decide(
        &self,
        elevator: &Elevator,
        ctx:      &PolicyContext<'_>,
        rng:      &mut SimRng,
    ) -> Direction;

    /// May the passenger at `idx` leave the elevator this round?
    ///
    /// Called during the disembark stage with indices into the pre-removal
    /// passenger list; `idx` is always in bounds.
    fn disembark_eligible(&self, elevator: &Elevator, idx: usize) -> bool {
        elevator.passengers()[idx].target == elevator.floor()
    }
}

//! The `ArrivalModel` trait — where each round's demand comes from.

use lift_core::{Round, SimRng};

use crate::Trip;

/// Pluggable source of per-round passenger demand.
///
/// Called exactly once per round by the engine, with the 1-indexed round
/// number and the arrivals RNG stream.  Implementations return the round's
/// new trips in arrival order; an empty `Vec` means a quiet round.
///
/// Models hold only their own parameters — everything round-specific arrives
/// through the call, so a model is reusable across runs and deterministic
/// given the stream it is handed.
pub trait ArrivalModel: Send + 'static {
    /// New demand for `round`, in arrival order.
    fn arrivals(&self, round: Round, rng: &mut SimRng) -> Vec<Trip>;
}

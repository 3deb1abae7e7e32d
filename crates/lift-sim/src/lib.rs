//! `lift-sim` — the round loop orchestrator for the rust_lift simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`sim`]      | `Sim<A, P>` and the four-stage round loop             |
//! | [`builder`]  | `SimBuilder` (validating construction)                |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                   |
//! | [`stats`]    | `RunStats`, `WaitSummary`                             |
//! | [`error`]    | `SimError`, `SimResult<T>`                            |
//!
//! # The round
//!
//! Each round executes four ordered stages with no overlap:
//!
//! 1. **Arrivals** — the arrival model produces this round's trips; each
//!    becomes a passenger queued on its start floor.
//! 2. **Disembark** — passengers the policy deems eligible leave at the
//!    elevator's current floor; their wait times are recorded.
//! 3. **Board** — each elevator takes waiters from its floor, in arrival
//!    order, until full or the floor's queue is empty.
//! 4. **Move** — the policy decides a direction per elevator (pure), then the
//!    engine applies every direction (uniform).
//!
//! After stage 4, everyone still waiting or onboard accrues one round of
//! wait — so a passenger never accrues wait in the round it departs.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{RunStats, WaitSummary};

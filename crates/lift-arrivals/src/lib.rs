//! `lift-arrivals` — per-round passenger demand.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`trip`]     | `Trip` — one requested journey                          |
//! | [`model`]    | `ArrivalModel` trait                                    |
//! | [`random`]   | `RandomArrivals` — uniform sampled demand               |
//! | [`schedule`] | `ArrivalSchedule`, `ScheduledArrivals` — replayed demand|
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Design notes
//!
//! An arrival model returns a flat, ordered `Vec<Trip>` for each round; the
//! engine admits passengers and merges them into the waiting registry in a
//! separate pass.  Models never touch simulation state — the only effect they
//! have is through their return value (and, for the random model, the draws
//! they consume from the RNG stream handed to them).

pub mod error;
pub mod model;
pub mod random;
pub mod schedule;
pub mod trip;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ScheduleError, ScheduleResult};
pub use model::ArrivalModel;
pub use random::RandomArrivals;
pub use schedule::{ArrivalSchedule, ScheduledArrivals};
pub use trip::Trip;

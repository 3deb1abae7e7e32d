//! `lift-core` — foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                   |
//! |---------------|--------------------------------------------|
//! | [`ids`]       | `ElevatorId`, `PassengerId`                |
//! | [`floor`]     | `Floor` and single-step floor arithmetic   |
//! | [`round`]     | `Round` counter                            |
//! | [`direction`] | `Direction` tri-state                      |
//! | [`rng`]       | `SimRng` (seeded, with child streams)      |
//! | [`config`]    | `SimConfig` and its precondition checks    |
//! | [`error`]     | `LiftError`, `LiftResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod round;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use round::Round;

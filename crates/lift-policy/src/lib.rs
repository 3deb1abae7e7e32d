//! `lift-policy` — movement policy trait and the three built-in policies.
//!
//! # Crate layout
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`context`]      | `PolicyContext<'a>` — read-only per-round snapshot   |
//! | [`model`]        | `MovementPolicy` trait                               |
//! | [`random`]       | `RandomPolicy` — uniform valid direction             |
//! | [`pushy`]        | `PushyPassenger` — first boarder rules the car       |
//! | [`short_sighted`]| `ShortSighted` — nearest request wins                |
//!
//! # Design notes
//!
//! The engine's move stage is split in two:
//!
//! 1. **Decide**: [`MovementPolicy::decide`] is called once per elevator, in
//!    fleet order, against an immutable [`PolicyContext`].  Policies mutate
//!    nothing; the only state they may consume is the RNG stream handed in.
//!
//! 2. **Apply**: the engine steps every elevator by its decided direction,
//!    checking the bounds contract (`Up` never at the top floor, `Down`
//!    never at the ground floor) as it goes.
//!
//! Disembark eligibility is also policy behavior — whether a passenger may
//! leave at the current floor depends on which policy runs the fleet — so it
//! lives on the trait rather than in the engine.

pub mod context;
pub mod model;
pub mod pushy;
pub mod random;
pub mod short_sighted;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use context::PolicyContext;
pub use model::MovementPolicy;
pub use pushy::PushyPassenger;
pub use random::RandomPolicy;
pub use short_sighted::ShortSighted;

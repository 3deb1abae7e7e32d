//! Simulation-wide base error type.
//!
//! Sub-crates define their own error enums (`ScheduleError`, `SimError`) and
//! convert `LiftError` into them via `From` impls, or keep them separate and
//! wrap `LiftError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for the other
/// `lift-*` crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {field} = {value} (minimum {min})")]
    InvalidConfig {
        field: &'static str,
        value: u64,
        min:   u64,
    },
}

/// Shorthand result type for `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;

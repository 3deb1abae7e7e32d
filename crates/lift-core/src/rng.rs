//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! One master seed per run.  Each stochastic component (arrival generation,
//! movement decisions) receives its own child stream derived as:
//!
//!   child_seed = draw() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  This
//! means:
//!
//! - Rerunning with the same master seed reproduces the run exactly.
//! - Swapping one component (say, the movement policy) never perturbs the
//!   draws another component sees.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded simulation RNG.
///
/// The engine creates one from `SimConfig::seed` and derives a child stream
/// per stochastic component.  Used only in single-threaded contexts — the
/// simulation has no parallel phase.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — one per
    /// stochastic component, so their streams stay independent.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` helpers that take a
    /// generic `Rng` (`rand::seq::index::sample`, distributions, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

//! Deterministic per-unit RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each behavior unit gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (unit_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive unit IDs uniformly across the seed space.
//! This means:
//!
//! - Units never share RNG state, so the stream a unit observes depends only
//!   on the global seed and its own registration index.
//! - Registering additional units at the tail does not disturb the seeds of
//!   existing units — runs are reproducible even as registries grow.
//! - A registry replayed with the same seed and the same request sequence
//!   produces byte-identical outcomes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::UnitId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── UnitRng ───────────────────────────────────────────────────────────────────

/// Per-unit deterministic RNG.
///
/// Registries create one per unit at registration time and store them in a
/// `Vec<UnitRng>` parallel to the unit table.  A `&mut UnitRng` is handed to
/// every `handle` call so stochastic units stay reproducible.
pub struct UnitRng(SmallRng);

impl UnitRng {
    /// Seed deterministically from the registry's global seed and a unit ID.
    pub fn new(global_seed: u64, unit: UnitId) -> Self {
        let seed = global_seed ^ (unit.0 as u64).wrapping_mul(MIXING_CONSTANT);
        UnitRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `rng.inner().gen_range(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

//! Dispatch sequence counter.
//!
//! # Design
//!
//! Every call to a registry's `dispatch` is stamped with a monotonically
//! increasing `Seq`.  The counter is the canonical ordering handle for
//! observers and trace rows: two dispatches against the same registry always
//! carry distinct, increasing sequence numbers, so trace output can be
//! correlated and sorted without timestamps.
//!
//! Using an integer counter as the canonical handle means all comparisons
//! are exact and O(1); no clock is involved anywhere in the framework.

use std::fmt;

/// The sequence number of one `dispatch` call against a registry.
///
/// Stored as `u64` to avoid overflow: at one dispatch per nanosecond a u64
/// lasts ~585 years of continuous traffic.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seq(pub u64);

impl Seq {
    pub const ZERO: Seq = Seq(0);

    /// Return the sequence number `n` dispatches after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Seq {
        Seq(self.0 + n)
    }

    /// Advance to the next dispatch, returning the value before the bump.
    ///
    /// Registries call this once at the top of every `dispatch` so the
    /// stamped value identifies the in-flight call.
    #[inline]
    pub fn bump(&mut self) -> Seq {
        let current = *self;
        self.0 += 1;
        current
    }

    /// Dispatches elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Seq) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Seq {
    type Output = Seq;
    #[inline]
    fn add(self, rhs: u64) -> Seq {
        Seq(self.0 + rhs)
    }
}

impl std::ops::Sub for Seq {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Seq) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

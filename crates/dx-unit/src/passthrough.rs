//! A no-op behavior unit — never handles anything.

use dx_core::UnitRng;

use crate::{DispatchContext, Handler, Verdict};

/// A [`Handler`] that always returns [`Verdict::Pass`].
///
/// Useful as a placeholder in tests, or as a chain link reserved for a rule
/// that is configured but not yet active.
pub struct PassThrough;

impl<R, T> Handler<R, T> for PassThrough {
    fn handle(
        &mut self,
        _req: &R,
        _ctx: &DispatchContext<'_>,
        _rng: &mut UnitRng,
    ) -> Verdict<T> {
        Verdict::Pass
    }
}

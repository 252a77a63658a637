//! The `Handler` trait — the main extension point for user code.

use dx_core::UnitRng;

use crate::{DispatchContext, Verdict};

/// A pluggable behavior unit.
///
/// Implement this trait to define one interchangeable piece of request
/// handling logic.  `R` is the request type, `T` the output type; all units
/// in one registry share both.  Every callback receives a read-only
/// [`DispatchContext`] and a mutable per-unit [`UnitRng`] so stochastic
/// units are deterministic given the registry seed.
///
/// # Required methods
///
/// Only [`handle`][Self::handle] is required.  The enter/exit hooks have
/// no-op defaults so simple units don't need to implement them.
///
/// # Ownership
///
/// A registry owns its units exclusively (`Box<dyn Handler<R, T>>`); nothing
/// outside the registry can reach a unit after registration.  Units take
/// `&mut self`, so small internal state (call counters, a latch) is fine.
/// The `Send + 'static` bound lets a whole registry move across threads —
/// wrap it in a `Mutex` if concurrent callers are ever needed.
///
/// # Example
///
/// ```rust,ignore
/// struct CapApprover { cap: u64 }
///
/// impl Handler<u64, String> for CapApprover {
///     fn handle(&mut self, req: &u64, ctx: &DispatchContext<'_>, _rng: &mut UnitRng) -> Verdict<String> {
///         if *req <= self.cap {
///             Verdict::Done(format!("approved by {}", ctx.label_of(ctx.unit).unwrap_or("?")))
///         } else {
///             Verdict::Pass
///         }
///     }
/// }
/// ```
pub trait Handler<R, T>: Send + 'static {
    /// Answer one request.
    ///
    /// Called by the registry when this unit is selected: always in state
    /// mode while the unit is current, in registration order during a chain
    /// walk.  Must run to completion — no suspension, no I/O owned here.
    fn handle(
        &mut self,
        req: &R,
        ctx: &DispatchContext<'_>,
        rng: &mut UnitRng,
    ) -> Verdict<T>;

    /// Called when this unit becomes the current unit of a state registry:
    /// once at registry construction for the initial unit, and after every
    /// applied transition.
    ///
    /// Default: does nothing.  Chain registries never call it.
    fn on_enter(&mut self, _ctx: &DispatchContext<'_>) {}

    /// Called when this unit stops being the current unit of a state
    /// registry, immediately before the incoming unit's
    /// [`on_enter`][Self::on_enter].
    ///
    /// Default: does nothing.  Chain registries never call it.
    fn on_exit(&mut self, _ctx: &DispatchContext<'_>) {}
}

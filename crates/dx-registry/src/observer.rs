//! Dispatch observer trait for instrumentation and trace collection.

use dx_core::{Seq, UnitId};

/// Callbacks invoked by `dispatch_with` at key points of one dispatch.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Events for one dispatch always arrive
/// in this order:
///
/// `on_dispatch_start` → `on_visit`* → (`on_transition`?) →
/// (`on_handled` | `on_unhandled`)
///
/// # Example — visit counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct VisitCounter { visits: usize }
///
/// impl DispatchObserver for VisitCounter {
///     fn on_visit(&mut self, _seq: Seq, _unit: UnitId) {
///         self.visits += 1;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once at the top of every dispatch, before any unit runs.
    fn on_dispatch_start(&mut self, _seq: Seq) {}

    /// Called immediately before a unit's `handle` runs.
    ///
    /// State mode visits exactly one unit per dispatch; chain mode visits
    /// one unit per link until a terminal verdict.
    fn on_visit(&mut self, _seq: Seq, _unit: UnitId) {}

    /// Called when a state registry applies a `Goto` transition, after the
    /// target has been validated and before `on_handled`.
    fn on_transition(&mut self, _seq: Seq, _from: UnitId, _to: UnitId) {}

    /// Called when `unit` produced the terminal verdict for this dispatch.
    fn on_handled(&mut self, _seq: Seq, _unit: UnitId) {}

    /// Called when the dispatch ends unhandled.  `visited` is the number of
    /// units that ran (chain length in chain mode, 1 in state mode).
    fn on_unhandled(&mut self, _seq: Seq, _visited: usize) {}
}

/// A [`DispatchObserver`] that does nothing.  Used internally by the plain
/// `dispatch` entry points; also handy in tests.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

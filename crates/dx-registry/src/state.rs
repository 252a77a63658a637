//! `StateRegistry` — single-current-unit dispatch (state/strategy style).

use dx_core::{DxError, DxResult, Seq, UnitId};
use dx_unit::{DispatchContext, Handler, Verdict};

use crate::observer::{DispatchObserver, NoopObserver};
use crate::outcome::Dispatched;
use crate::table::UnitTable;

/// A registry with exactly one current unit.
///
/// Every dispatch goes to the current unit; the unit's verdict may carry a
/// [`Verdict::Goto`] instruction, which the registry applies — running the
/// outgoing unit's `on_exit` and the incoming unit's `on_enter` — before
/// returning control to the caller.  The caller can also move the current
/// unit explicitly with [`set_current`][Self::set_current].
///
/// Swapping the current unit to implement the strategy flavor (caller-driven
/// `set_current`, units that never `Goto`) needs nothing extra: the two
/// flavors differ only in who triggers the transition.
///
/// Create via [`RegistryBuilder`][crate::RegistryBuilder], which guarantees
/// an initial current unit, or via [`new`][Self::new] + `register` +
/// `set_current` for incremental assembly.
pub struct StateRegistry<R: 'static, T: 'static> {
    table:   UnitTable<R, T>,
    /// `UnitId::INVALID` until the first `set_current` succeeds.
    current: UnitId,
    /// Next dispatch sequence number.
    seq:     Seq,
}

impl<R: 'static, T: 'static> StateRegistry<R, T> {
    // ── Construction and registration ─────────────────────────────────────

    /// An empty registry.  [`dispatch`][Self::dispatch] fails with
    /// [`DxError::UnknownUnit`] until a unit is registered and made current.
    pub fn new(seed: u64) -> Self {
        Self {
            table:   UnitTable::new(seed),
            current: UnitId::INVALID,
            seq:     Seq::ZERO,
        }
    }

    /// Register a unit and return its id.
    ///
    /// Registration is append-only and never rejected; duplicate labels are
    /// the caller's responsibility.  Registering does not change the current
    /// unit.
    pub fn register<H: Handler<R, T>>(&mut self, label: &str, unit: H) -> UnitId {
        self.register_boxed(label, Box::new(unit))
    }

    /// `register` for an already-boxed unit (used by the builder).
    pub fn register_boxed(&mut self, label: &str, unit: Box<dyn Handler<R, T>>) -> UnitId {
        self.table.register(label, unit)
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// The current unit, or `UnitId::INVALID` if none was ever set.
    #[inline]
    pub fn current(&self) -> UnitId {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// First unit registered under `label`, if any.
    #[inline]
    pub fn find(&self, label: &str) -> Option<UnitId> {
        self.table.find(label)
    }

    #[inline]
    pub fn label_of(&self, id: UnitId) -> Option<&str> {
        self.table.label_of(id)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Make `unit` the current unit.
    ///
    /// Runs the outgoing unit's `on_exit` (skipped if no unit was current)
    /// and the incoming unit's `on_enter`.  Fails with
    /// [`DxError::UnknownUnit`] if `unit` was never registered, in which
    /// case the current unit is unchanged and no hook runs.
    pub fn set_current(&mut self, unit: UnitId) -> DxResult<()> {
        if !self.table.contains(unit) {
            return Err(DxError::UnknownUnit(unit));
        }
        self.move_current(self.seq, unit);
        Ok(())
    }

    /// Hook-running transition.  Caller has already validated `to`.
    fn move_current(&mut self, seq: Seq, to: UnitId) {
        let from = self.current;
        let labels = self.table.labels.as_slice();

        if let Some(outgoing) = self.table.units.get_mut(from.index()) {
            let ctx = DispatchContext::new(seq, from, labels);
            outgoing.on_exit(&ctx);
        }

        self.current = to;
        let ctx = DispatchContext::new(seq, to, labels);
        self.table.units[to.index()].on_enter(&ctx);
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Forward `req` to the current unit.
    ///
    /// If the unit's verdict carries a transition, it is applied before this
    /// method returns, so the caller always observes the post-transition
    /// registry.  A `Goto` naming an unregistered unit fails with
    /// [`DxError::UnknownUnit`] and leaves the current unit unchanged.
    pub fn dispatch(&mut self, req: &R) -> DxResult<Dispatched<T>> {
        self.dispatch_with(req, &mut NoopObserver)
    }

    /// [`dispatch`][Self::dispatch] with observer callbacks.
    pub fn dispatch_with<O: DispatchObserver>(
        &mut self,
        req: &R,
        obs: &mut O,
    ) -> DxResult<Dispatched<T>> {
        let seq = self.seq.bump();
        obs.on_dispatch_start(seq);

        let id = self.current;
        if !self.table.contains(id) {
            return Err(DxError::UnknownUnit(id));
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let labels = self.table.labels.as_slice();
        let rng = &mut self.table.rngs[id.index()];
        let unit = &mut self.table.units[id.index()];

        let ctx = DispatchContext::new(seq, id, labels);
        obs.on_visit(seq, id);
        let verdict = unit.handle(req, &ctx, rng);

        match verdict {
            Verdict::Done(output) => {
                obs.on_handled(seq, id);
                Ok(Dispatched::Handled { output, by: id })
            }

            Verdict::Goto { output, next } => {
                // Validate before mutating: a bad target must leave the
                // current unit exactly as it was.
                if !self.table.contains(next) {
                    return Err(DxError::UnknownUnit(next));
                }
                self.move_current(seq, next);
                obs.on_transition(seq, id, next);
                obs.on_handled(seq, id);
                Ok(Dispatched::Handled { output, by: id })
            }

            Verdict::Pass => {
                obs.on_unhandled(seq, 1);
                Ok(Dispatched::Unhandled)
            }
        }
    }
}

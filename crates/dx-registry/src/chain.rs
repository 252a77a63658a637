//! `ChainRegistry` — ordered try-each-in-turn dispatch (chain style).

use dx_core::{Seq, UnitId};
use dx_unit::{DispatchContext, Handler, Verdict};

use crate::observer::{DispatchObserver, NoopObserver};
use crate::outcome::Dispatched;
use crate::table::UnitTable;

/// A registry that tries its units in registration order until one takes
/// the request.
///
/// The walk is an explicit loop over the ordered unit table — there is no
/// pass-to-next call chain, so chain depth never consumes stack.  Each unit
/// is visited at most once per dispatch; an exhausted (or empty) chain
/// yields [`Dispatched::Unhandled`].
///
/// Dispatching against a chain cannot fail: there is no current unit to
/// mis-reference, so `dispatch` returns [`Dispatched`] directly rather than
/// a `Result`.
pub struct ChainRegistry<R: 'static, T: 'static> {
    table: UnitTable<R, T>,
    /// Next dispatch sequence number.
    seq:   Seq,
}

impl<R: 'static, T: 'static> ChainRegistry<R, T> {
    // ── Construction and registration ─────────────────────────────────────

    /// An empty chain.  Dispatching immediately yields `Unhandled`.
    pub fn new(seed: u64) -> Self {
        Self {
            table: UnitTable::new(seed),
            seq:   Seq::ZERO,
        }
    }

    /// Append a unit to the chain tail and return its id.
    ///
    /// Registration is append-only and never rejected; duplicate labels are
    /// the caller's responsibility.
    pub fn register<H: Handler<R, T>>(&mut self, label: &str, unit: H) -> UnitId {
        self.register_boxed(label, Box::new(unit))
    }

    /// `register` for an already-boxed unit (used by the builder).
    pub fn register_boxed(&mut self, label: &str, unit: Box<dyn Handler<R, T>>) -> UnitId {
        self.table.register(label, unit)
    }

    // ── Introspection ─────────────────────────────────────────────────────

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

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Walk the chain from the head until a unit returns a terminal verdict.
    ///
    /// `Pass` moves to the next unit.  `Done` stops the walk; so does
    /// `Goto`, whose transition target is ignored — chains have no current
    /// unit to move (see [`Verdict::Goto`]).  Units after the terminal one
    /// are not visited.
    pub fn dispatch(&mut self, req: &R) -> Dispatched<T> {
        self.dispatch_with(req, &mut NoopObserver)
    }

    /// [`dispatch`][Self::dispatch] with observer callbacks.
    pub fn dispatch_with<O: DispatchObserver>(
        &mut self,
        req: &R,
        obs: &mut O,
    ) -> Dispatched<T> {
        let seq = self.seq.bump();
        obs.on_dispatch_start(seq);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let labels = self.table.labels.as_slice();
        let rngs = &mut self.table.rngs;
        let units = &mut self.table.units;

        for (i, unit) in units.iter_mut().enumerate() {
            let id = UnitId(i as u32);
            let ctx = DispatchContext::new(seq, id, labels);
            obs.on_visit(seq, id);

            match unit.handle(req, &ctx, &mut rngs[i]) {
                Verdict::Done(output) | Verdict::Goto { output, .. } => {
                    obs.on_handled(seq, id);
                    return Dispatched::Handled { output, by: id };
                }
                Verdict::Pass => {}
            }
        }

        obs.on_unhandled(seq, units.len());
        Dispatched::Unhandled
    }
}

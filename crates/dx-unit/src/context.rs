//! Read-only registry state passed to every unit callback.

use dx_core::{Seq, UnitId};

/// A read-only snapshot of the registry passed to every
/// [`Handler`][crate::Handler] callback.
///
/// `DispatchContext` is built by the registry for each unit visit and borrows
/// the registry's label table.  Units use it to identify themselves, to stamp
/// outputs with the dispatch sequence number, and to resolve transition
/// targets by label.
///
/// # Lifetimes
///
/// All borrows live for the duration of one `handle`/`on_enter`/`on_exit`
/// call.  The registry never allows mutable access to the label table while
/// a context is live.
pub struct DispatchContext<'a> {
    /// Sequence number of the dispatch this visit belongs to.
    pub seq: Seq,

    /// The unit being visited: the current unit in state mode, the unit
    /// whose turn it is during a chain walk.
    pub unit: UnitId,

    /// Registration-order labels for every unit in the registry, indexed by
    /// `UnitId`.  Labels are display names; duplicates are allowed.
    pub labels: &'a [Box<str>],
}

impl<'a> DispatchContext<'a> {
    /// Build a new context for a single unit visit.
    #[inline]
    pub fn new(seq: Seq, unit: UnitId, labels: &'a [Box<str>]) -> Self {
        Self { seq, unit, labels }
    }

    /// Number of units registered in the owning registry.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.labels.len()
    }

    /// The label of `unit`, or `None` if the id is out of range.
    #[inline]
    pub fn label_of(&self, unit: UnitId) -> Option<&str> {
        self.labels.get(unit.index()).map(|l| l.as_ref())
    }

    /// The first unit registered under `label`, or `None` if no unit carries
    /// that label.  Linear scan — registries are expected to be small.
    ///
    /// The usual way for a unit to name a [`Verdict::Goto`][crate::Verdict]
    /// target without holding a `UnitId` at construction time.
    pub fn find(&self, label: &str) -> Option<UnitId> {
        self.labels
            .iter()
            .position(|l| l.as_ref() == label)
            .map(|i| UnitId(i as u32))
    }
}

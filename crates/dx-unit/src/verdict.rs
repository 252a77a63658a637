//! Unit verdicts — what a behavior unit decided about one request.

use dx_core::UnitId;

/// The decision a unit returns from [`Handler::handle`][crate::Handler::handle].
///
/// Verdicts are produced by units and consumed by the registry; the registry
/// applies any requested transition after the unit returns, so a unit never
/// mutates registry state directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    /// The request is answered with `output`.  Terminal in both modes.
    Done(T),

    /// The request is answered with `output`, and the registry should make
    /// `next` the current unit before returning to the caller.
    ///
    /// Meaningful in state mode only.  A chain registry treats `Goto` as
    /// terminal and ignores `next` — chains have no current unit to move.
    Goto {
        output: T,
        next:   UnitId,
    },

    /// Not handled.  A chain registry moves on to the next unit; a state
    /// registry reports the dispatch as unhandled.
    Pass,
}

impl<T> Verdict<T> {
    /// `true` for `Done` and `Goto`, `false` for `Pass`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Pass)
    }

    /// The transition target, if this verdict requests one.
    #[inline]
    pub fn transition(&self) -> Option<UnitId> {
        match self {
            Verdict::Goto { next, .. } => Some(*next),
            _ => None,
        }
    }
}

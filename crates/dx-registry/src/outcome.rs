//! Registry-level dispatch outcomes.

use dx_core::UnitId;

/// What a registry reports back for one `dispatch` call.
///
/// `Unhandled` is an ordinary value, not an error: a chain may legitimately
/// exhaust without any unit taking the request, and a state-mode unit may
/// decline with [`Verdict::Pass`][dx_unit::Verdict].  The caller decides how
/// to react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched<T> {
    /// A unit answered the request.
    Handled {
        output: T,
        /// The unit that produced the terminal verdict.
        by: UnitId,
    },

    /// Every visited unit passed.
    Unhandled,
}

impl<T> Dispatched<T> {
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatched::Handled { .. })
    }

    /// The unit that handled the request, if any.
    #[inline]
    pub fn handled_by(&self) -> Option<UnitId> {
        match self {
            Dispatched::Handled { by, .. } => Some(*by),
            Dispatched::Unhandled => None,
        }
    }

    /// Consume the outcome, keeping only the output.
    #[inline]
    pub fn into_output(self) -> Option<T> {
        match self {
            Dispatched::Handled { output, .. } => Some(output),
            Dispatched::Unhandled => None,
        }
    }
}

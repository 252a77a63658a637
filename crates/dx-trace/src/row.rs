//! Plain data row types written by trace backends.

/// One unit visit during one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitRow {
    pub seq:      u64,
    pub unit_id:  u32,
    /// Whether this visit produced the terminal verdict.
    pub terminal: bool,
}

/// Summary of one complete dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummaryRow {
    pub seq:     u64,
    /// Number of units that ran.
    pub visited: u64,
    /// The unit that handled the request; `u32::MAX` if the dispatch ended
    /// unhandled.
    pub handled_by: u32,
    /// Transition target applied during this dispatch; `u32::MAX` if the
    /// current unit did not move.
    pub moved_to: u32,
}

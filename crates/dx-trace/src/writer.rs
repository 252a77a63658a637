//! The `TraceWriter` trait implemented by all backend writers.

use crate::{DispatchSummaryRow, TraceResult, VisitRow};

/// Trait implemented by trace backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write the batch of unit visits belonging to one dispatch.
    fn write_visits(&mut self, rows: &[VisitRow]) -> TraceResult<()>;

    /// Write one dispatch summary row.
    fn write_summary(&mut self, row: &DispatchSummaryRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}

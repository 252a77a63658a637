//! `TraceObserver<W>` — bridges `DispatchObserver` to a `TraceWriter`.

use dx_core::{Seq, UnitId};
use dx_registry::DispatchObserver;

use crate::row::{DispatchSummaryRow, VisitRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`DispatchObserver`] that records every dispatch to any
/// [`TraceWriter`] backend.
///
/// Visits are buffered per dispatch and written as a batch when the dispatch
/// ends (`on_handled`/`on_unhandled`), together with one summary row.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After dispatching is done, call
/// [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    /// Visits of the in-flight dispatch.
    visits:     Vec<VisitRow>,
    seq:        u64,
    moved_to:   u32,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            visits:     Vec::new(),
            seq:        0,
            moved_to:   u32::MAX,
            last_error: None,
        }
    }

    /// Flush the backend.  Call once after the last dispatch.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    /// Write the buffered visits and the summary row for the dispatch that
    /// just ended.
    fn flush_dispatch(&mut self, handled_by: u32) {
        let visited = self.visits.len() as u64;
        let visits = std::mem::take(&mut self.visits);
        let result = self.writer.write_visits(&visits);
        self.store_err(result);

        let row = DispatchSummaryRow {
            seq: self.seq,
            visited,
            handled_by,
            moved_to: self.moved_to,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
    }
}

impl<W: TraceWriter> DispatchObserver for TraceObserver<W> {
    fn on_dispatch_start(&mut self, seq: Seq) {
        self.visits.clear();
        self.seq = seq.0;
        self.moved_to = u32::MAX;
    }

    fn on_visit(&mut self, seq: Seq, unit: UnitId) {
        self.visits.push(VisitRow {
            seq:      seq.0,
            unit_id:  unit.0,
            terminal: false,
        });
    }

    fn on_transition(&mut self, _seq: Seq, _from: UnitId, to: UnitId) {
        self.moved_to = to.0;
    }

    fn on_handled(&mut self, _seq: Seq, unit: UnitId) {
        if let Some(last) = self.visits.last_mut() {
            debug_assert_eq!(last.unit_id, unit.0);
            last.terminal = true;
        }
        self.flush_dispatch(unit.0);
    }

    fn on_unhandled(&mut self, _seq: Seq, _visited: usize) {
        self.flush_dispatch(u32::MAX);
    }
}

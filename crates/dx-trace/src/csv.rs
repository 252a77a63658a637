//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `dispatch_visits.csv`
//! - `dispatch_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{DispatchSummaryRow, TraceResult, VisitRow};

/// Writes dispatch traces to two CSV files.
pub struct CsvTraceWriter {
    visits:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut visits = Writer::from_path(dir.join("dispatch_visits.csv"))?;
        visits.write_record(["seq", "unit_id", "terminal"])?;

        let mut summaries = Writer::from_path(dir.join("dispatch_summaries.csv"))?;
        summaries.write_record(["seq", "visited", "handled_by", "moved_to"])?;

        Ok(Self {
            visits,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_visits(&mut self, rows: &[VisitRow]) -> TraceResult<()> {
        for row in rows {
            self.visits.write_record(&[
                row.seq.to_string(),
                row.unit_id.to_string(),
                (row.terminal as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &DispatchSummaryRow) -> TraceResult<()> {
        self.summaries.write_record(&[
            row.seq.to_string(),
            row.visited.to_string(),
            row.handled_by.to_string(),
            row.moved_to.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.visits.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

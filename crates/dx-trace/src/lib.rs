//! `dx-trace` — dispatch trace output for the rust_dx framework.
//!
//! Records what every `dispatch` call did — which units ran, who handled the
//! request, where the current unit moved — through a
//! [`DispatchObserver`][dx_registry::DispatchObserver] bridge, and writes it
//! via a pluggable [`TraceWriter`] backend.  One backend ships: CSV.
//!
//! | File created            | One row per            |
//! |-------------------------|------------------------|
//! | `dispatch_visits.csv`   | unit visit             |
//! | `dispatch_summaries.csv`| dispatch call          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use dx_trace::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! chain.dispatch_with(&request, &mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{DispatchSummaryRow, VisitRow};
pub use writer::TraceWriter;

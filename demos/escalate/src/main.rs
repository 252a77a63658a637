//! escalate — chain-mode demo for the rust_dx dispatch framework.
//!
//! An expense-approval chain: a stochastic spot audit, then three approvers
//! with increasing signing limits.  Every dispatch is traced to CSV via
//! dx-trace.  The run is fully deterministic: same seed, same audits, same
//! output files.

use std::path::Path;

use anyhow::Result;

use dx_core::{Seq, UnitId, UnitRng};
use dx_registry::{Dispatched, DispatchObserver, RegistryBuilder};
use dx_trace::{CsvTraceWriter, TraceObserver};
use dx_unit::{DispatchContext, Handler, Verdict};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const AUDIT_RATE: f64 = 0.15;

// ── Chain units ───────────────────────────────────────────────────────────────

/// Randomly pulls a request aside for audit, regardless of amount.
struct SpotAudit {
    rate: f64,
}

impl Handler<u64, String> for SpotAudit {
    fn handle(
        &mut self,
        req: &u64,
        _ctx: &DispatchContext<'_>,
        rng:  &mut UnitRng,
    ) -> Verdict<String> {
        if rng.gen_bool(self.rate) {
            Verdict::Done(format!("${req} held for audit"))
        } else {
            Verdict::Pass
        }
    }
}

/// Approves anything up to its signing limit.
struct Approver {
    limit: u64,
}

impl Handler<u64, String> for Approver {
    fn handle(
        &mut self,
        req:  &u64,
        ctx:  &DispatchContext<'_>,
        _rng: &mut UnitRng,
    ) -> Verdict<String> {
        if *req <= self.limit {
            let who = ctx.label_of(ctx.unit).unwrap_or("?");
            Verdict::Done(format!("${req} approved by {who}"))
        } else {
            Verdict::Pass
        }
    }
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<O: DispatchObserver> {
    inner:   O,
    visits:  usize,
    handled: usize,
}

impl<O: DispatchObserver> CountingObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, visits: 0, handled: 0 }
    }
}

impl<O: DispatchObserver> DispatchObserver for CountingObserver<O> {
    fn on_dispatch_start(&mut self, seq: Seq) {
        self.inner.on_dispatch_start(seq);
    }
    fn on_visit(&mut self, seq: Seq, unit: UnitId) {
        self.visits += 1;
        self.inner.on_visit(seq, unit);
    }
    fn on_transition(&mut self, seq: Seq, from: UnitId, to: UnitId) {
        self.inner.on_transition(seq, from, to);
    }
    fn on_handled(&mut self, seq: Seq, unit: UnitId) {
        self.handled += 1;
        self.inner.on_handled(seq, unit);
    }
    fn on_unhandled(&mut self, seq: Seq, visited: usize) {
        self.inner.on_unhandled(seq, visited);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== escalate — rust_dx chain-mode demo ===");
    println!("Seed: {SEED}  |  Audit rate: {AUDIT_RATE}");
    println!();

    let mut chain = RegistryBuilder::new(SEED)
        .unit("spot-audit", SpotAudit { rate: AUDIT_RATE })
        .unit("team-lead",  Approver { limit: 100 })
        .unit("manager",    Approver { limit: 500 })
        .unit("director",   Approver { limit: 5_000 })
        .build_chain()?;

    std::fs::create_dir_all("output/escalate")?;
    let writer = CsvTraceWriter::new(Path::new("output/escalate"))?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer));

    let expenses: [u64; 8] = [40, 250, 90, 1_200, 500, 4_999, 60_000, 75];

    for amount in expenses {
        match chain.dispatch_with(&amount, &mut obs) {
            Dispatched::Handled { output, by } => {
                let who = chain.label_of(by).unwrap_or("?");
                println!("{amount:>7}  →  {output}  (unit {who})");
            }
            Dispatched::Unhandled => {
                println!("{amount:>7}  →  nobody can sign this, rejected");
            }
        }
    }

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }

    println!();
    println!("Dispatches: {}  |  Unit visits: {}  |  Handled: {}",
        expenses.len(), obs.visits, obs.handled);
    println!("Trace written to output/escalate/dispatch_visits.csv and dispatch_summaries.csv");
    Ok(())
}

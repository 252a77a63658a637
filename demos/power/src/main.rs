//! power — state-mode demo for the rust_dx dispatch framework.
//!
//! A two-state TV remote: pressing power toggles Off ↔ On, volume presses
//! only do something while the set is on.  The registry owns both states;
//! each unit answers the presses it cares about and hands the rest back as
//! `Pass`.

use anyhow::Result;

use dx_core::{UnitId, UnitRng};
use dx_registry::{Dispatched, RegistryBuilder};
use dx_unit::{DispatchContext, Handler, Verdict};

// ── Requests ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Press {
    Power,
    VolumeUp,
}

// ── States ────────────────────────────────────────────────────────────────────

struct OffState;

impl Handler<Press, String> for OffState {
    fn handle(
        &mut self,
        req:  &Press,
        ctx:  &DispatchContext<'_>,
        _rng: &mut UnitRng,
    ) -> Verdict<String> {
        match req {
            Press::Power => Verdict::Goto {
                output: "powering on".to_string(),
                next:   ctx.find("on").unwrap_or(UnitId::INVALID),
            },
            // A dark TV ignores the volume rocker.
            Press::VolumeUp => Verdict::Pass,
        }
    }

    fn on_enter(&mut self, _ctx: &DispatchContext<'_>) {
        println!("          [screen goes dark]");
    }
}

struct OnState {
    volume: u32,
}

impl Handler<Press, String> for OnState {
    fn handle(
        &mut self,
        req:  &Press,
        ctx:  &DispatchContext<'_>,
        _rng: &mut UnitRng,
    ) -> Verdict<String> {
        match req {
            Press::Power => Verdict::Goto {
                output: "powering off".to_string(),
                next:   ctx.find("off").unwrap_or(UnitId::INVALID),
            },
            Press::VolumeUp => {
                self.volume += 1;
                Verdict::Done(format!("volume at {}", self.volume))
            }
        }
    }

    fn on_enter(&mut self, _ctx: &DispatchContext<'_>) {
        println!("          [screen lights up]");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== power — rust_dx state-mode demo ===");
    println!();

    let mut remote = RegistryBuilder::new(42)
        .unit("off", OffState)
        .unit("on",  OnState { volume: 0 })
        .initial("off")
        .build_state()?;

    let presses = [
        Press::VolumeUp, // ignored while off
        Press::Power,    // off → on
        Press::VolumeUp,
        Press::VolumeUp,
        Press::Power,    // on → off
        Press::Power,    // off → on again (volume is remembered)
        Press::VolumeUp,
    ];

    for press in presses {
        let state = remote.label_of(remote.current()).unwrap_or("?").to_string();
        match remote.dispatch(&press)? {
            Dispatched::Handled { output, .. } => {
                println!("{state:>4} + {press:?}: {output}");
            }
            Dispatched::Unhandled => {
                println!("{state:>4} + {press:?}: (ignored)");
            }
        }
    }

    println!();
    println!(
        "final state: {}",
        remote.label_of(remote.current()).unwrap_or("?")
    );
    Ok(())
}

//! `dx-unit` — behavior unit trait and verdict types.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`verdict`]     | `Verdict` enum (`Done`, `Goto`, `Pass`)                      |
//! | [`context`]     | `DispatchContext<'a>` — read-only view shared by all units   |
//! | [`handler`]     | `Handler<R, T>` trait                                        |
//! | [`passthrough`] | `PassThrough` — placeholder that never handles anything      |
//!
//! # Design notes
//!
//! A registry owns its units as `Box<dyn Handler<R, T>>` and calls exactly
//! one method per visit:
//!
//! 1. **Selection** — the registry picks the unit (current unit in state
//!    mode, next-in-order in chain mode) and builds a `DispatchContext`
//!    borrowing its label table.
//!
//! 2. **Handling** — `Handler::handle` runs to completion and returns a
//!    [`Verdict`]; any state transition it requests is applied by the
//!    registry after the call returns, never by the unit itself.
//!
//! Units receive `&mut self`, so small internal state (counters, toggles) is
//! fine, but all cross-unit coordination must go through verdicts — a unit
//! never sees another unit.

pub mod context;
pub mod handler;
pub mod passthrough;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use context::DispatchContext;
pub use handler::Handler;
pub use passthrough::PassThrough;
pub use verdict::Verdict;

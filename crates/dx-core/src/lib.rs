//! `dx-core` — foundational types for the `rust_dx` dispatch framework.
//!
//! This crate is a dependency of every other `dx-*` crate.  It intentionally
//! has no `dx-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`ids`]   | `UnitId`                                  |
//! | [`seq`]   | `Seq` — monotonic dispatch counter        |
//! | [`rng`]   | `UnitRng` (per-unit deterministic RNG)    |
//! | [`error`] | `DxError`, `DxResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `UnitId`/`Seq`.   |

pub mod error;
pub mod ids;
pub mod rng;
pub mod seq;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DxError, DxResult};
pub use ids::UnitId;
pub use rng::UnitRng;
pub use seq::Seq;

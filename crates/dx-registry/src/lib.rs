//! `dx-registry` — dispatch orchestrators for the rust_dx framework.
//!
//! # Two dispatch modes
//!
//! ```text
//! StateRegistry   — exactly one unit is current at any time.
//!                   dispatch(req):
//!                     ① stamp the call with the next Seq
//!                     ② forward req to the current unit
//!                     ③ Done(out)       → Handled { output, by }
//!                        Goto(out, next) → validate next, run exit/enter
//!                                          hooks, move current, then Handled
//!                        Pass            → Unhandled
//!
//! ChainRegistry   — units are tried head-to-tail in registration order.
//!                   dispatch(req):
//!                     ① stamp the call with the next Seq
//!                     ② walk units until one returns a terminal verdict
//!                     ③ exhausted (or empty) chain → Unhandled after
//!                        visiting every unit exactly once
//! ```
//!
//! Transitions happen only inside `dispatch` (via a unit's verdict) or
//! `set_current`; a failed transition target leaves the current unit
//! unchanged.  Both registries are synchronous and run each dispatch to
//! completion — wrap a registry in a `Mutex` if concurrent callers must
//! observe transitions atomically.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dx_registry::{Dispatched, NoopObserver, RegistryBuilder};
//!
//! let mut chain = RegistryBuilder::new(42)
//!     .unit("team-lead", CapApprover { cap: 100 })
//!     .unit("manager",   CapApprover { cap: 500 })
//!     .build_chain()?;
//! match chain.dispatch(&250) {
//!     Dispatched::Handled { output, by } => println!("{by}: {output}"),
//!     Dispatched::Unhandled => println!("nobody took it"),
//! }
//! ```

pub mod builder;
pub mod chain;
pub mod observer;
pub mod outcome;
pub mod state;

mod table;


pub use builder::RegistryBuilder;
pub use chain::ChainRegistry;
pub use observer::{DispatchObserver, NoopObserver};
pub use outcome::Dispatched;
pub use state::StateRegistry;

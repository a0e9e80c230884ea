//! joycab (workspace facade crate).
//!
//! This package keeps the `joycab::{pad, watch, clock, core, scores, term,
//! types}` public API in one place while the implementation lives in
//! dedicated crates under `crates/`. The only code of its own is the
//! [`bridge`] module wiring pad events into game intents.

pub mod bridge;

pub use joycab_clock as clock;
pub use joycab_core as core;
pub use joycab_pad as pad;
pub use joycab_scores as scores;
pub use joycab_term as term;
pub use joycab_types as types;
pub use joycab_watch as watch;

//! Tennis scorer (workspace facade crate).
//!
//! The scoring rules live in dedicated crates under `crates/`; this package
//! re-exports them as `tennis_scorer::{core, history, types}` and carries the
//! replay driver used by the `tennis-scorer` binary.

pub use tennis_scorer_core as core;
pub use tennis_scorer_history as history;
pub use tennis_scorer_types as types;

pub mod cli;
pub mod logging;
pub mod replay;

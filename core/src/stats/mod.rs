//! Running statistics over hook events.
//!
//! [`apply`] is the pure fold; [`StatsFile`] wraps it in a single
//! read-modify-write against the persisted document.

mod model;
mod persist;
mod rules;
mod update;

pub use model::{CommandRecord, SessionSummary, Statistics};
pub use persist::StatsFile;
pub use rules::{NoRules, RuleExtractor, RuleHit};
pub use update::{apply, enforce_retention};

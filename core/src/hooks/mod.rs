//! Hook entry points. Each takes the raw stdin payload and returns the
//! [`HookOutcome`] the process should report.

mod action_log;
mod block;
mod input;
mod observe;
mod outcome;

pub use action_log::{format_action_line, log_action};
pub use block::block;
pub use input::parse_event;
pub use observe::observe;
pub use outcome::{HookOutcome, DENY_EXIT};

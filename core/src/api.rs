//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `observatory_core::api` instead of reaching into internal modules.

pub use crate::config::{
    load_builtin_defaults, load_default, load_with_override, ActionLogConfig, AppConfig,
    DashboardConfig, LoggingConfig, Paths, PolicyConfig, RulesConfig, StatsConfig, StoreConfig,
};
pub use crate::context::{AppContext, Services, ServicesFactory};
pub use crate::dashboard::{regenerate, render, scan, DashboardInput, SystemSnapshot};
pub use crate::error::{CliError, PatchError};
pub use crate::event::{HookEvent, HookKind};
pub use crate::hooks::{block, log_action, observe, HookOutcome, DENY_EXIT};
pub use crate::policy::{PathPolicy, PolicyAction};
pub use crate::stats::{RuleExtractor, RuleHit, Statistics, StatsFile};
pub use crate::store::EventStore;

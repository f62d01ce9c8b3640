//! Access policy for the block hook.

use crate::event::HookEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyAction {
    Allow,
    Deny { reason: String },
}

impl PolicyAction {
    pub fn is_deny(&self) -> bool {
        matches!(self, PolicyAction::Deny { .. })
    }
}

/// Decides whether the agent may touch the file an event refers to.
pub trait PathPolicy: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, event: &HookEvent) -> PolicyAction;
}

/// Permits everything. Used when no policy is configured.
pub struct AllowAll;

impl PathPolicy for AllowAll {
    fn name(&self) -> &str {
        "allow-all"
    }

    fn check(&self, _event: &HookEvent) -> PolicyAction {
        PolicyAction::Allow
    }
}

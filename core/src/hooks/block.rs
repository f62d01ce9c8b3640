use crate::context::AppContext;
use crate::policy::PolicyAction;

use super::input::parse_event;
use super::outcome::HookOutcome;

/// Asks the configured policy whether the agent may touch the event's file.
pub fn block(ctx: &AppContext, raw: &str) -> HookOutcome {
    let event = match parse_event("block", raw) {
        Ok(ev) => ev,
        Err(outcome) => return outcome,
    };

    let policy = &ctx.services().policy;
    match policy.check(&event) {
        PolicyAction::Allow => HookOutcome::allow(),
        PolicyAction::Deny { reason } => {
            tracing::info!(
                policy = policy.name(),
                kind = %event.kind,
                file = event.file_path().unwrap_or(""),
                "access denied"
            );
            HookOutcome::deny(reason)
        }
    }
}

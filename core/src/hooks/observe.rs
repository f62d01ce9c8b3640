use crate::context::AppContext;
use crate::dashboard::{regenerate, should_regenerate};

use super::input::parse_event;
use super::outcome::HookOutcome;

/// Records one event: append to the store, fold into statistics, refresh the
/// dashboard when due. Never blocks the agent.
pub async fn observe(ctx: &AppContext, raw: &str) -> HookOutcome {
    let event = match parse_event("observe", raw) {
        Ok(ev) => ev,
        Err(outcome) => return outcome,
    };

    let store = ctx.store();
    store.append(&event).await;

    let stats_file = ctx.stats_file();
    let rules = &ctx.services().rules;
    let stats = stats_file.update(&event, rules.as_ref(), &ctx.cfg().stats);
    tracing::debug!(
        kind = %event.kind,
        session = %event.session_id,
        total = stats.total_events,
        rules = rules.name(),
        log = %store.path().display(),
        stats = %stats_file.path().display(),
        "event observed"
    );

    let mut outcome = HookOutcome::ok(format!(
        "[Observatory] {} | total:{}",
        event.kind, stats.total_events
    ));

    let exists = ctx.paths().dashboard_file.exists();
    if ctx.cfg().dashboard.enabled && should_regenerate(&event.hook_kind(), exists) {
        if let Err(e) = regenerate(ctx.cfg(), &stats, &store).await {
            tracing::warn!(error = %e, "dashboard regeneration failed");
            outcome.stderr = format!("[Observatory] Dashboard error: {e:#}");
        }
    }

    outcome
}

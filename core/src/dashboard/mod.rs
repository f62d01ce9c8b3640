//! Static HTML dashboard.
//!
//! [`scan`] takes a snapshot of the IDE's files, [`render`] turns statistics,
//! recent events and the snapshot into one document, and [`regenerate`]
//! writes it next to the event log.

mod format;
mod render;
mod scan;
mod template;

use std::path::PathBuf;

use anyhow::Context;

use crate::config::AppConfig;
use crate::event::HookKind;
use crate::stats::Statistics;
use crate::store::EventStore;
use crate::util::atomic_write;

pub use format::{format_file_size, html_escape, percent};
pub use render::{render, DashboardInput};
pub use scan::{
    classify, scan, ActiveConversation, CategoryScan, ChangeEntry, ConversationMeta,
    ConversationSize, FileStatus, ScannedFile, SystemSnapshot,
};

/// The observe hook rebuilds the page when it does not exist yet, and
/// otherwise once per AI response.
pub fn should_regenerate(kind: &HookKind, exists: bool) -> bool {
    !exists || kind.is_response()
}

/// Renders the dashboard from scratch and writes it atomically.
pub async fn regenerate(
    cfg: &AppConfig,
    stats: &Statistics,
    store: &EventStore,
) -> anyhow::Result<PathBuf> {
    let paths = cfg.paths();
    let recent = store.read_recent(cfg.dashboard.recent_events).await;
    let now = chrono::Local::now();
    let snapshot = scan(&cfg.dashboard, &paths, now);
    let generated_at = now.format("%Y-%m-%d %H:%M:%S").to_string();

    let html = render(&DashboardInput {
        stats,
        recent: &recent,
        snapshot: &snapshot,
        generated_at: &generated_at,
    });

    atomic_write(&paths.dashboard_file, html.as_bytes())
        .with_context(|| format!("Failed to write dashboard to {:?}", paths.dashboard_file))?;

    tracing::debug!(
        path = %paths.dashboard_file.display(),
        files = snapshot.total_files,
        events = recent.len(),
        "dashboard regenerated"
    );
    Ok(paths.dashboard_file)
}

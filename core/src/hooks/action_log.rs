use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::context::AppContext;
use crate::event::HookEvent;
use crate::util::truncate_chars;

use super::input::parse_event;
use super::outcome::HookOutcome;

/// `[2026-01-02 03:04:05] post_write_code: file=src/main.rs`
pub fn format_action_line(event: &HookEvent, now: &str, command_preview: usize) -> String {
    let summary = if event.has_payload("file_path") {
        format!("file={}", event.payload_str("file_path").unwrap_or(""))
    } else if let Some(cmd) = event
        .payload_str("command_line")
        .or_else(|| event.payload_str("command"))
    {
        format!("cmd={}", truncate_chars(cmd, command_preview))
    } else {
        String::new()
    };
    format!("[{now}] {}: {summary}", event.kind)
}

/// Appends one human-readable line per action to the action log.
pub async fn log_action(ctx: &AppContext, raw: &str) -> HookOutcome {
    let event = match parse_event("log-action", raw) {
        Ok(ev) => ev,
        Err(outcome) => return outcome,
    };

    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let line = format_action_line(&event, &now, ctx.cfg().action_log.command_preview);

    let path = &ctx.paths().action_log;
    match append_line(path, &line).await {
        Ok(()) => HookOutcome::allow(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "action log write failed");
            HookOutcome::diagnostic(format!("Hook error: {e}"))
        }
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{line}\n").as_bytes()).await?;
    file.flush().await
}

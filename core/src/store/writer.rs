use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::config::AppConfig;
use crate::event::HookEvent;

use super::rotate::keep_last_lines;

/// Append-only JSON-lines log of every hook event.
///
/// Writes never surface errors: a failing log must not hold up the action
/// that produced the event.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
    rotate_bytes: u64,
    max_lines: usize,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>, rotate_bytes: u64, max_lines: usize) -> Self {
        Self {
            path: path.into(),
            rotate_bytes,
            max_lines,
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(
            cfg.paths().event_log,
            cfg.store.rotate_bytes,
            cfg.store.max_lines,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stamps `_logged_at`, appends the event as one line, then rotates if needed.
    pub async fn append(&self, event: &HookEvent) {
        let mut stamped = event.clone();
        stamped.logged_at = Some(
            chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
        );

        match stamped.to_line() {
            Ok(line) => {
                if let Err(e) = self.append_line(line).await {
                    tracing::warn!(path = %self.path.display(), error = %e, "event append failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "event serialization failed"),
        }

        self.rotate_if_needed().await;
    }

    async fn append_line(&self, mut line: String) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        if !line.ends_with('\n') {
            line.push('\n');
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    /// Truncates the log to its most recent `max_lines` lines once it has
    /// grown past `rotate_bytes`. Returns true when the file was rewritten.
    pub async fn rotate_if_needed(&self) -> bool {
        match self.try_rotate().await {
            Ok(rotated) => {
                if rotated {
                    tracing::info!(
                        path = %self.path.display(),
                        max_lines = self.max_lines,
                        "event log rotated"
                    );
                }
                rotated
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "event log rotation failed");
                false
            }
        }
    }

    async fn try_rotate(&self) -> std::io::Result<bool> {
        let meta = match tokio::fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if meta.len() < self.rotate_bytes {
            return Ok(false);
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        match keep_last_lines(&content, self.max_lines) {
            Some(kept) => {
                tokio::fs::write(&self.path, kept).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The last `n` lines of the log, parsed; unreadable lines are dropped.
    pub async fn read_recent(&self, n: usize) -> Vec<HookEvent> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %e, "event log read failed");
                }
                return Vec::new();
            }
        };

        let lines: Vec<&str> = content.trim().lines().collect();
        let start = lines.len().saturating_sub(n);
        lines[start..]
            .iter()
            .filter_map(|line| HookEvent::from_json(line).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(i: usize) -> HookEvent {
        HookEvent::new("post_read_code", "s1")
            .with_timestamp(format!("2026-01-01T00:00:{:02}", i % 60))
            .with_payload("file_path", format!("/src/f{i}.rs"))
    }

    #[tokio::test]
    async fn append_stamps_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path().join("logs/log.jsonl"), 1 << 20, 100);

        store.append(&event(1)).await;
        store.append(&event(2)).await;

        let recent = store.read_recent(10).await;
        assert_eq!(recent.len(), 2);
        assert!(recent[0].logged_at.is_some());
        assert_eq!(recent[1].file_path(), Some("/src/f2.rs"));
    }

    #[tokio::test]
    async fn read_recent_skips_garbage_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let store = EventStore::new(&path, 1 << 20, 100);
        assert!(store.read_recent(5).await.is_empty());

        std::fs::write(
            &path,
            "{\"agent_action_name\":\"a\"}\nnot-json\n{\"agent_action_name\":\"b\"}\n",
        )
        .unwrap();
        let kinds: Vec<String> = store.read_recent(5).await.into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn rotation_keeps_most_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        // Tiny threshold so every append past the cap triggers rotation.
        let store = EventStore::new(&path, 64, 5);

        for i in 0..12 {
            store.append(&event(i)).await;
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        let files: Vec<String> = store
            .read_recent(10)
            .await
            .iter()
            .map(|e| e.file_path().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            files,
            (7..12).map(|i| format!("/src/f{i}.rs")).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn below_threshold_never_rotates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.jsonl");
        let store = EventStore::new(&path, u64::MAX, 2);

        for i in 0..4 {
            store.append(&event(i)).await;
        }
        assert!(!store.rotate_if_needed().await);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 4);
    }
}

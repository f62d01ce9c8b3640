use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Local};

use crate::config::{
    DashboardConfig, Paths, ScanCategory, MCP_KEY_FILE, SKILLS_CATEGORY, WORKFLOWS_CATEGORY,
};

const KEY_FILE_ICON: &str = "⚙️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    New,
    Modified,
    Stable,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::New => "new",
            FileStatus::Modified => "modified",
            FileStatus::Stable => "stable",
        }
    }
}

/// Age-based classification against the two configured thresholds.
pub fn classify(age: Duration, cfg: &DashboardConfig) -> FileStatus {
    let age_h = age.num_seconds() as f64 / 3600.0;
    if age_h < cfg.new_threshold_hours as f64 {
        FileStatus::New
    } else if age_h < cfg.modified_threshold_hours as f64 {
        FileStatus::Modified
    } else {
        FileStatus::Stable
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannedFile {
    pub name: String,
    pub rel: String,
    pub size: u64,
    pub mtime: DateTime<Local>,
    pub status: FileStatus,
}

impl ScannedFile {
    pub fn mtime_str(&self) -> String {
        self.mtime.format("%m-%d %H:%M").to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScan {
    pub name: String,
    pub icon: String,
    pub files: Vec<ScannedFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEntry {
    pub file: ScannedFile,
    pub category: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSize {
    pub name: String,
    pub size_mb: f64,
    pub date: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveConversation {
    pub id: String,
    pub size_mb: f64,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationMeta {
    pub total_size_mb: f64,
    pub oldest: Option<DateTime<Local>>,
    pub newest: Option<DateTime<Local>>,
    /// Conversation count per `MM/DD`.
    pub by_day: BTreeMap<String, usize>,
    /// Largest first.
    pub size_dist: Vec<ConversationSize>,
    pub active: Vec<ActiveConversation>,
}

/// Live view of the files around the IDE, taken once per render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSnapshot {
    pub categories: Vec<CategoryScan>,
    /// Newest first.
    pub recent_changes: Vec<ChangeEntry>,
    pub total_files: usize,
    pub new_count: usize,
    pub modified_count: usize,
    pub skills_count: usize,
    pub workflows_count: usize,
    pub memory_count: usize,
    pub conversation_count: usize,
    pub implicit_count: usize,
    pub mcp_count: usize,
    pub conversations: ConversationMeta,
}

pub fn scan(cfg: &DashboardConfig, paths: &Paths, now: DateTime<Local>) -> SystemSnapshot {
    let mut snap = SystemSnapshot::default();

    for category in &cfg.categories {
        let dir = paths.resolve_scan_path(&category.path);
        if !dir.is_dir() {
            continue;
        }
        let files = scan_category(category, &dir, &paths.project_root, cfg, now);
        for f in &files {
            match f.status {
                FileStatus::New => snap.new_count += 1,
                FileStatus::Modified => snap.modified_count += 1,
                FileStatus::Stable => {}
            }
            snap.recent_changes.push(ChangeEntry {
                file: f.clone(),
                category: category.name.clone(),
                icon: category.icon.clone(),
            });
        }
        snap.total_files += files.len();
        if category.name == SKILLS_CATEGORY {
            snap.skills_count = files.len();
        } else if category.name == WORKFLOWS_CATEGORY {
            snap.workflows_count = files.len();
        }
        snap.categories.push(CategoryScan {
            name: category.name.clone(),
            icon: category.icon.clone(),
            files,
        });
    }

    for key in &cfg.key_files {
        let path = paths.resolve_scan_path(&key.path);
        let Some(file) = stat_file(&path, None, cfg, now) else {
            continue;
        };
        snap.recent_changes.push(ChangeEntry {
            file,
            category: key.name.clone(),
            icon: KEY_FILE_ICON.to_string(),
        });
        if key.name == MCP_KEY_FILE {
            snap.mcp_count = count_mcp_servers(&path);
        }
    }

    let home = &paths.windsurf_home;
    snap.memory_count = list_pb(&home.join("memories")).len();
    snap.implicit_count = list_pb(&home.join("implicit")).len();
    let conversations = list_pb(&home.join("cascade"));
    snap.conversation_count = conversations.len();
    snap.conversations = conversation_meta(&conversations, cfg, now);

    snap.recent_changes
        .sort_by(|a, b| b.file.mtime.cmp(&a.file.mtime));
    snap
}

fn scan_category(
    category: &ScanCategory,
    dir: &Path,
    project_root: &Path,
    cfg: &DashboardConfig,
    now: DateTime<Local>,
) -> Vec<ScannedFile> {
    let pattern = format!(
        "{}/**/*",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut entries: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            tracing::warn!(pattern = %pattern, error = %e, "invalid scan pattern");
            return Vec::new();
        }
    };
    entries.sort();

    entries
        .into_iter()
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .map(|n| !n.to_string_lossy().starts_with('.'))
                .unwrap_or(false)
        })
        .filter(|p| extension_allowed(p, &category.extensions))
        .filter_map(|p| stat_file(&p, Some(project_root), cfg, now))
        .collect()
}

fn extension_allowed(path: &Path, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

/// `None` when the file is missing or unreadable.
fn stat_file(
    path: &Path,
    project_root: Option<&Path>,
    cfg: &DashboardConfig,
    now: DateTime<Local>,
) -> Option<ScannedFile> {
    let meta = std::fs::metadata(path).ok()?;
    if !meta.is_file() {
        return None;
    }
    let mtime: DateTime<Local> = meta.modified().ok()?.into();
    let name = path.file_name()?.to_string_lossy().to_string();
    let rel = project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_else(|| name.clone());

    Some(ScannedFile {
        name,
        rel,
        size: meta.len(),
        mtime,
        status: classify(now - mtime, cfg),
    })
}

fn list_pb(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let pattern = format!("{}/*.pb", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut out: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(_) => Vec::new(),
    };
    out.sort();
    out
}

fn count_mcp_servers(path: &Path) -> usize {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok())
        .and_then(|v| v.get("mcpServers").and_then(|m| m.as_object()).map(|m| m.len()))
        .unwrap_or(0)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn conversation_meta(files: &[PathBuf], cfg: &DashboardConfig, now: DateTime<Local>) -> ConversationMeta {
    let mut meta = ConversationMeta::default();
    let active_window = Duration::minutes(cfg.active_threshold_minutes);

    for pb in files {
        let Ok(st) = std::fs::metadata(pb) else {
            continue;
        };
        let Ok(modified) = st.modified() else {
            continue;
        };
        let mt: DateTime<Local> = modified.into();
        let size_mb = st.len() as f64 / (1024.0 * 1024.0);
        let is_active = now - mt < active_window;
        let stem = pb
            .file_stem()
            .map(|s| s.to_string_lossy().chars().take(8).collect::<String>())
            .unwrap_or_default();

        meta.total_size_mb += size_mb;
        meta.size_dist.push(ConversationSize {
            name: stem.clone(),
            size_mb: round1(size_mb),
            date: mt.format("%m-%d %H:%M").to_string(),
            active: is_active,
        });
        *meta.by_day.entry(mt.format("%m/%d").to_string()).or_insert(0) += 1;
        if is_active {
            meta.active.push(ActiveConversation {
                id: stem,
                size_mb: round1(size_mb),
                last: mt.format("%H:%M:%S").to_string(),
            });
        }
        if meta.oldest.map(|o| mt < o).unwrap_or(true) {
            meta.oldest = Some(mt);
        }
        if meta.newest.map(|n| mt > n).unwrap_or(true) {
            meta.newest = Some(mt);
        }
    }

    meta.size_dist
        .sort_by(|a, b| b.size_mb.partial_cmp(&a.size_mb).unwrap_or(std::cmp::Ordering::Equal));
    meta.total_size_mb = round1(meta.total_size_mb);
    meta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, KeyFile};
    use std::fs;

    fn layout(root: &Path) -> (AppConfig, Paths) {
        let cfg = AppConfig {
            data_dir: Some(root.join("data").to_string_lossy().to_string()),
            windsurf_home: Some(root.join("ws").to_string_lossy().to_string()),
            project_root: Some(root.join("proj").to_string_lossy().to_string()),
            ..AppConfig::default()
        };
        let paths = cfg.paths();
        (cfg, paths)
    }

    #[test]
    fn classify_uses_both_thresholds() {
        let cfg = DashboardConfig::default();
        assert_eq!(classify(Duration::hours(1), &cfg), FileStatus::New);
        assert_eq!(classify(Duration::hours(30), &cfg), FileStatus::Modified);
        assert_eq!(classify(Duration::hours(200), &cfg), FileStatus::Stable);
        assert_eq!(classify(Duration::hours(24), &cfg), FileStatus::Modified);
    }

    #[test]
    fn scans_categories_and_filters() {
        let tmp = tempfile::tempdir().unwrap();
        let (cfg, paths) = layout(tmp.path());
        let wf = tmp.path().join("proj/workflows");
        fs::create_dir_all(wf.join("nested")).unwrap();
        fs::write(wf.join("a.md"), "a").unwrap();
        fs::write(wf.join("nested/b.MD"), "bb").unwrap();
        fs::write(wf.join("skip.txt"), "x").unwrap();
        fs::write(wf.join(".hidden.md"), "x").unwrap();

        let snap = scan(&cfg.dashboard, &paths, Local::now());

        assert_eq!(snap.categories.len(), 1);
        let names: Vec<&str> = snap.categories[0].files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.MD"]);
        assert_eq!(snap.categories[0].files[1].rel, "workflows/nested/b.MD");
        assert_eq!(snap.workflows_count, 2);
        assert_eq!(snap.total_files, 2);
        assert_eq!(snap.new_count, 2);
        assert_eq!(snap.recent_changes.len(), 2);
    }

    #[test]
    fn counts_ide_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let (mut cfg, paths) = layout(tmp.path());
        cfg.dashboard.key_files = vec![KeyFile {
            name: MCP_KEY_FILE.into(),
            path: "@windsurf/mcp_config.json".into(),
        }];
        let ws = tmp.path().join("ws");
        fs::create_dir_all(ws.join("cascade")).unwrap();
        fs::create_dir_all(ws.join("memories")).unwrap();
        fs::write(ws.join("cascade/abcdef0123456789.pb"), vec![0u8; 2048]).unwrap();
        fs::write(ws.join("cascade/fedcba.pb"), vec![0u8; 10]).unwrap();
        fs::write(ws.join("memories/m1.pb"), "m").unwrap();
        fs::write(ws.join("memories/notes.txt"), "m").unwrap();
        fs::write(
            ws.join("mcp_config.json"),
            r#"{"mcpServers": {"git": {}, "fetch": {}, "db": {}}}"#,
        )
        .unwrap();

        let snap = scan(&cfg.dashboard, &paths, Local::now());

        assert_eq!(snap.conversation_count, 2);
        assert_eq!(snap.memory_count, 1);
        assert_eq!(snap.implicit_count, 0);
        assert_eq!(snap.mcp_count, 3);
        assert_eq!(snap.conversations.active.len(), 2);
        assert_eq!(snap.conversations.size_dist[0].name, "abcdef01");
        assert_eq!(snap.recent_changes[0].category, MCP_KEY_FILE);
    }

    #[test]
    fn missing_directories_yield_empty_snapshot() {
        let tmp = tempfile::tempdir().unwrap();
        let (cfg, paths) = layout(tmp.path());
        let snap = scan(&cfg.dashboard, &paths, Local::now());
        assert_eq!(snap, SystemSnapshot::default());
    }
}

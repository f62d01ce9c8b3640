use std::path::{Path, PathBuf};

use super::types::AppConfig;

const WINDSURF_PREFIX: &str = "@windsurf/";

/// Get the observatory data directory: `$OBSERVATORY_HOME` or `~/.observatory`.
pub fn get_observatory_home() -> anyhow::Result<PathBuf> {
    if let Ok(v) = std::env::var("OBSERVATORY_HOME") {
        if !v.trim().is_empty() {
            return Ok(PathBuf::from(expand(&v)));
        }
    }
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".observatory"))
}

/// Default IDE home: `~/.codeium/windsurf`.
pub fn default_windsurf_home() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".codeium").join("windsurf"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: $OBSERVATORY_HOME/config.toml (highest)
    let home = get_observatory_home()?;
    let home_config = home.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let cfg = if home_config.exists() {
        load_from_file(&home_config)?
    } else if local_config.exists() {
        load_from_file(local_config)?
    } else {
        AppConfig::default()
    };

    finalize(cfg, &home)
}

/// Built-in defaults with every path resolved, for when no config file can
/// be read.
pub fn load_builtin_defaults() -> anyhow::Result<AppConfig> {
    finalize(AppConfig::default(), &get_observatory_home()?)
}

pub fn load_from_file(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let cfg = toml::from_str::<AppConfig>(&s)?;
    Ok(cfg)
}

/// Loads an explicit config file and fills in every unset path.
pub fn load_with_override(path: &Path) -> anyhow::Result<AppConfig> {
    let cfg = load_from_file(path)?;
    finalize(cfg, &get_observatory_home()?)
}

fn finalize(mut cfg: AppConfig, home: &Path) -> anyhow::Result<AppConfig> {
    // Environment variable overrides (Priority 0: highest)
    if let Ok(v) = std::env::var("OBSERVATORY_DATA_DIR") {
        if !v.trim().is_empty() {
            cfg.data_dir = Some(v);
        }
    }
    if let Ok(v) = std::env::var("OBSERVATORY_WINDSURF_HOME") {
        if !v.trim().is_empty() {
            cfg.windsurf_home = Some(v);
        }
    }
    if let Ok(v) = std::env::var("OBSERVATORY_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v;
        }
    }

    let data_dir = match non_empty(cfg.data_dir.as_deref()) {
        Some(d) => PathBuf::from(expand(d)),
        None => home.to_path_buf(),
    };
    cfg.data_dir = Some(data_dir.to_string_lossy().to_string());

    if non_empty(cfg.windsurf_home.as_deref()).is_none() {
        cfg.windsurf_home = Some(default_windsurf_home()?.to_string_lossy().to_string());
    }
    if non_empty(cfg.project_root.as_deref()).is_none() {
        let cwd = std::env::current_dir()?;
        cfg.project_root = Some(cwd.to_string_lossy().to_string());
    }

    let paths = cfg.paths();
    std::fs::create_dir_all(&paths.store_dir)?;
    cfg.store.directory = Some(paths.store_dir.to_string_lossy().to_string());

    if non_empty(cfg.logging.directory.as_deref()).is_none() {
        cfg.logging.directory = Some(paths.diagnostics_dir.to_string_lossy().to_string());
    }

    Ok(cfg)
}

/// Every file location the hooks touch, resolved from an [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub store_dir: PathBuf,
    pub event_log: PathBuf,
    pub stats_file: PathBuf,
    pub dashboard_file: PathBuf,
    pub action_log: PathBuf,
    pub diagnostics_dir: PathBuf,
    pub windsurf_home: PathBuf,
    pub project_root: PathBuf,
}

impl AppConfig {
    /// Resolves paths without touching the filesystem. Unset directories fall
    /// back to relative defaults so an unfinalized config still yields a layout.
    pub fn paths(&self) -> Paths {
        let data_dir = non_empty(self.data_dir.as_deref())
            .map(|d| PathBuf::from(expand(d)))
            .unwrap_or_else(|| PathBuf::from(".observatory"));
        let store_dir = non_empty(self.store.directory.as_deref())
            .map(|d| PathBuf::from(expand(d)))
            .unwrap_or_else(|| data_dir.join("logs"));
        let diagnostics_dir = non_empty(self.logging.directory.as_deref())
            .map(|d| PathBuf::from(expand(d)))
            .unwrap_or_else(|| data_dir.join("diagnostics"));
        let windsurf_home = non_empty(self.windsurf_home.as_deref())
            .map(|d| PathBuf::from(expand(d)))
            .unwrap_or_else(|| data_dir.join("windsurf"));
        let project_root = non_empty(self.project_root.as_deref())
            .map(|d| PathBuf::from(expand(d)))
            .unwrap_or_else(|| PathBuf::from("."));

        Paths {
            event_log: store_dir.join(&self.store.log_file),
            stats_file: store_dir.join(&self.stats.file),
            dashboard_file: store_dir.join(&self.dashboard.file),
            action_log: data_dir.join(&self.action_log.file),
            data_dir,
            store_dir,
            diagnostics_dir,
            windsurf_home,
            project_root,
        }
    }
}

impl Paths {
    /// Resolves a scan location: `@windsurf/...` against the IDE home,
    /// absolute paths as-is, everything else against the project root.
    pub fn resolve_scan_path(&self, raw: &str) -> PathBuf {
        if let Some(rest) = raw.strip_prefix(WINDSURF_PREFIX) {
            return self.windsurf_home.join(rest);
        }
        let expanded = PathBuf::from(expand(raw));
        if expanded.is_absolute() {
            expanded
        } else {
            self.project_root.join(expanded)
        }
    }
}

fn non_empty(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}

fn expand(raw: &str) -> String {
    shellexpand::tilde(raw).into_owned()
}

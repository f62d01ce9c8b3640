use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory for everything the hooks write. Defaults to `~/.observatory`.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// The IDE's own home directory, scanned by the dashboard.
    #[serde(default)]
    pub windsurf_home: Option<String>,

    /// Project directory the dashboard's relative paths are computed from.
    #[serde(default)]
    pub project_root: Option<String>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub action_log: ActionLogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            windsurf_home: None,
            project_root: None,
            logging: LoggingConfig::default(),
            store: StoreConfig::default(),
            stats: StatsConfig::default(),
            dashboard: DashboardConfig::default(),
            policy: PolicyConfig::default(),
            rules: RulesConfig::default(),
            action_log: ActionLogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr. Off by default: hook stderr is shown to the user.
    #[serde(default)]
    pub console: bool,

    /// If true, log to a daily file under `directory`.
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "observatory_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses `<data_dir>/diagnostics`.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_file() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: false,
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the event log, statistics and dashboard.
    #[serde(default)]
    pub directory: Option<String>,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    /// Rotation only kicks in once the log reaches this many bytes.
    #[serde(default = "default_rotate_bytes")]
    pub rotate_bytes: u64,

    /// Lines kept after rotation.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

fn default_log_file() -> String {
    "cascade_log.jsonl".to_string()
}

fn default_rotate_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_max_lines() -> usize {
    10_000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: None,
            log_file: default_log_file(),
            rotate_bytes: default_rotate_bytes(),
            max_lines: default_max_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_stats_file")]
    pub file: String,

    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    #[serde(default = "default_max_files")]
    pub max_files: usize,

    #[serde(default = "default_max_commands")]
    pub max_commands: usize,
}

fn default_stats_file() -> String {
    "stats.json".to_string()
}

fn default_max_sessions() -> usize {
    50
}

fn default_max_files() -> usize {
    100
}

fn default_max_commands() -> usize {
    100
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            file: default_stats_file(),
            max_sessions: default_max_sessions(),
            max_files: default_max_files(),
            max_commands: default_max_commands(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_enabled")]
    pub enabled: bool,

    #[serde(default = "default_dashboard_file")]
    pub file: String,

    /// How many events the renderer pulls from the store.
    #[serde(default = "default_recent_events")]
    pub recent_events: usize,

    #[serde(default = "default_new_threshold_hours")]
    pub new_threshold_hours: i64,

    #[serde(default = "default_modified_threshold_hours")]
    pub modified_threshold_hours: i64,

    /// Conversations touched within this window count as active.
    #[serde(default = "default_active_threshold_minutes")]
    pub active_threshold_minutes: i64,

    #[serde(default = "default_categories")]
    pub categories: Vec<ScanCategory>,

    #[serde(default = "default_key_files")]
    pub key_files: Vec<KeyFile>,
}

fn default_dashboard_enabled() -> bool {
    true
}

fn default_dashboard_file() -> String {
    "dashboard.html".to_string()
}

fn default_recent_events() -> usize {
    100
}

fn default_new_threshold_hours() -> i64 {
    24
}

fn default_modified_threshold_hours() -> i64 {
    168
}

fn default_active_threshold_minutes() -> i64 {
    10
}

/// A directory the dashboard scans. Relative paths resolve against the
/// project root, a leading `@windsurf/` against the IDE home.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanCategory {
    pub name: String,
    pub path: String,
    #[serde(default = "default_category_icon")]
    pub icon: String,
    /// Lower-case extensions including the dot. Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,
}

fn default_category_icon() -> String {
    "📁".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyFile {
    pub name: String,
    pub path: String,
}

pub const SKILLS_CATEGORY: &str = "Global Skills";
pub const WORKFLOWS_CATEGORY: &str = "Workflows";
pub const MCP_KEY_FILE: &str = "MCP Config";

fn default_categories() -> Vec<ScanCategory> {
    let md = || vec![".md".to_string()];
    vec![
        ScanCategory {
            name: "Rule Templates".into(),
            path: "project-templates".into(),
            icon: "📋".into(),
            extensions: md(),
        },
        ScanCategory {
            name: WORKFLOWS_CATEGORY.into(),
            path: "workflows".into(),
            icon: "🔄".into(),
            extensions: md(),
        },
        ScanCategory {
            name: "Management".into(),
            path: "management".into(),
            icon: "📂".into(),
            extensions: md(),
        },
        ScanCategory {
            name: "Observatory".into(),
            path: "observatory".into(),
            icon: "🔭".into(),
            extensions: Vec::new(),
        },
        ScanCategory {
            name: SKILLS_CATEGORY.into(),
            path: "@windsurf/skills".into(),
            icon: "🧠".into(),
            extensions: md(),
        },
    ]
}

fn default_key_files() -> Vec<KeyFile> {
    vec![
        KeyFile {
            name: "Global Rules".into(),
            path: "@windsurf/memories/global_rules.md".into(),
        },
        KeyFile {
            name: "Hooks Config".into(),
            path: "@windsurf/hooks.json".into(),
        },
        KeyFile {
            name: MCP_KEY_FILE.into(),
            path: "@windsurf/mcp_config.json".into(),
        },
    ]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: default_dashboard_enabled(),
            file: default_dashboard_file(),
            recent_events: default_recent_events(),
            new_threshold_hours: default_new_threshold_hours(),
            modified_threshold_hours: default_modified_threshold_hours(),
            active_threshold_minutes: default_active_threshold_minutes(),
            categories: default_categories(),
            key_files: default_key_files(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Case-insensitive substrings; a file path containing any of them is denied.
    #[serde(default = "default_blocked_patterns")]
    pub blocked_patterns: Vec<String>,
}

fn default_blocked_patterns() -> Vec<String> {
    [".env", "secrets", "credentials", "private_key", ".pem", ".key"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            blocked_patterns: default_blocked_patterns(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Multi-line regex with two capture groups: rule type, rule name.
    #[serde(default = "default_rule_pattern")]
    pub pattern: String,
}

pub fn default_rule_pattern() -> String {
    r"(?m)- \(([^)]+)\) Triggered Rule: (.+?)\s*$".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            pattern: default_rule_pattern(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLogConfig {
    #[serde(default = "default_action_log_file")]
    pub file: String,

    /// Commands are cut to this many characters in the action log.
    #[serde(default = "default_command_preview")]
    pub command_preview: usize,
}

fn default_action_log_file() -> String {
    "cascade_actions.log".to_string()
}

fn default_command_preview() -> usize {
    80
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self {
            file: default_action_log_file(),
            command_preview: default_command_preview(),
        }
    }
}

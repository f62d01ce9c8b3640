use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Running totals across every hook invocation, persisted as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    #[serde(default)]
    pub total_events: u64,

    #[serde(default)]
    pub events_by_type: BTreeMap<String, u64>,

    #[serde(default)]
    pub sessions: BTreeMap<String, SessionSummary>,

    /// Keyed by `"[type] name"`.
    #[serde(default)]
    pub rules_triggered: BTreeMap<String, u64>,

    /// Keyed by bare file name.
    #[serde(default)]
    pub files_accessed: BTreeMap<String, u64>,

    /// Oldest first.
    #[serde(default)]
    pub commands_executed: Vec<CommandRecord>,

    #[serde(default)]
    pub first_event: Option<String>,

    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSummary {
    #[serde(default)]
    pub first_seen: String,

    #[serde(default)]
    pub last_seen: String,

    #[serde(default)]
    pub event_count: u64,

    #[serde(default)]
    pub events: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandRecord {
    pub cmd: String,
    pub time: String,
    #[serde(default)]
    pub cwd: String,
}

impl Statistics {
    /// Sessions ordered most recently active first.
    pub fn sessions_by_recency(&self) -> Vec<(&String, &SessionSummary)> {
        let mut out: Vec<_> = self.sessions.iter().collect();
        out.sort_by(|a, b| b.1.last_seen.cmp(&a.1.last_seen));
        out
    }

    /// Entries of a counter map ordered by count, highest first.
    pub fn ranked(map: &BTreeMap<String, u64>) -> Vec<(&String, u64)> {
        let mut out: Vec<_> = map.iter().map(|(k, v)| (k, *v)).collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

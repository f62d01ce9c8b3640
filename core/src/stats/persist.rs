use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{AppConfig, StatsConfig};
use crate::event::HookEvent;
use crate::util::atomic_write;

use super::model::Statistics;
use super::rules::RuleExtractor;
use super::update::apply;

/// The persisted statistics document. Every update is one scoped
/// load → apply → save cycle; nothing is cached between invocations.
#[derive(Debug, Clone)]
pub struct StatsFile {
    path: PathBuf,
}

impl StatsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(cfg.paths().stats_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable documents load as empty statistics.
    pub fn load(&self) -> Statistics {
        if !self.path.exists() {
            return Statistics::default();
        }
        match self.try_load() {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "statistics unreadable, starting fresh");
                Statistics::default()
            }
        }
    }

    fn try_load(&self) -> Result<Statistics> {
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read statistics from {:?}", self.path))?;
        serde_json::from_str(&json).context("Failed to deserialize statistics")
    }

    pub fn save(&self, stats: &Statistics) -> Result<()> {
        let json = serde_json::to_string_pretty(stats).context("Failed to serialize statistics")?;
        atomic_write(&self.path, json.as_bytes())
            .with_context(|| format!("Failed to write statistics to {:?}", self.path))
    }

    /// Folds `event` into the persisted document and returns the new totals.
    /// A failed save is logged; the caller still gets the updated value.
    pub fn update(
        &self,
        event: &HookEvent,
        rules: &dyn RuleExtractor,
        limits: &StatsConfig,
    ) -> Statistics {
        let now = chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();
        let stats = apply(self.load(), event, rules, limits, &now);
        if let Err(e) = self.save(&stats) {
            tracing::warn!(error = %e, "statistics save failed");
        }
        stats
    }
}

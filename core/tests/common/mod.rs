#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use observatory_core::api::{AppConfig, AppContext, HookEvent, PathPolicy, PolicyAction, RuleExtractor, RuleHit, Services};
use serde_json::{json, Value};
use tempfile::TempDir;

pub struct Sandbox {
    pub dir: TempDir,
    pub ctx: AppContext,
}

impl Sandbox {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// A context whose every path lives under a fresh temp directory.
pub fn sandbox(services: Services) -> Sandbox {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    let cfg = AppConfig {
        data_dir: Some(root.join("data").to_string_lossy().to_string()),
        windsurf_home: Some(root.join("windsurf").to_string_lossy().to_string()),
        project_root: Some(root.join("project").to_string_lossy().to_string()),
        ..AppConfig::default()
    };
    let ctx = AppContext::new(cfg, services);
    Sandbox { dir, ctx }
}

pub fn event_json(kind: &str, session: &str, tool_info: Value) -> String {
    json!({
        "agent_action_name": kind,
        "trajectory_id": session,
        "execution_id": "exec-1",
        "timestamp": "2026-04-01T12:00:00",
        "tool_info": tool_info,
    })
    .to_string()
}

/// Denies any path containing one of the given fragments.
pub struct FragmentPolicy(pub Vec<&'static str>);

impl PathPolicy for FragmentPolicy {
    fn name(&self) -> &str {
        "fragment"
    }

    fn check(&self, event: &HookEvent) -> PolicyAction {
        let path = event.file_path().unwrap_or("");
        match self.0.iter().find(|f| path.contains(*f)) {
            Some(f) => PolicyAction::Deny {
                reason: format!("denied: {f}"),
            },
            None => PolicyAction::Allow,
        }
    }
}

/// Every line shaped `RULE <type> <name>` counts as one hit.
pub struct LineRules;

impl RuleExtractor for LineRules {
    fn name(&self) -> &str {
        "line"
    }

    fn extract(&self, text: &str) -> Vec<RuleHit> {
        text.lines()
            .filter_map(|l| l.strip_prefix("RULE "))
            .filter_map(|rest| rest.split_once(' '))
            .map(|(t, n)| RuleHit::new(t, n))
            .collect()
    }
}

pub fn services_with(policy: impl PathPolicy + 'static) -> Services {
    Services {
        rules: Arc::new(LineRules),
        policy: Arc::new(policy),
    }
}

use observatory_core::event::HookEvent;
use observatory_core::policy::{PathPolicy, PolicyAction};

/// Denies any file whose lower-cased path contains one of the configured
/// fragments. Events without a file path are allowed.
pub struct BlockedPathPolicy {
    patterns: Vec<String>,
}

impl BlockedPathPolicy {
    pub fn new(patterns: &[String]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|p| p.to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn matching_pattern(&self, file_path: &str) -> Option<&str> {
        let path = file_path.to_lowercase();
        self.patterns
            .iter()
            .find(|p| path.contains(p.as_str()))
            .map(String::as_str)
    }
}

impl PathPolicy for BlockedPathPolicy {
    fn name(&self) -> &str {
        "blocked-paths"
    }

    fn check(&self, event: &HookEvent) -> PolicyAction {
        let Some(path) = event.file_path() else {
            return PolicyAction::Allow;
        };
        match self.matching_pattern(path) {
            Some(pattern) => PolicyAction::Deny {
                reason: format!("🔒 Blocked: AI cannot access files matching '{pattern}'"),
            },
            None => PolicyAction::Allow,
        }
    }
}

/// One rule marker found in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub rule_type: String,
    pub rule_name: String,
}

impl RuleHit {
    pub fn new(rule_type: impl Into<String>, rule_name: impl Into<String>) -> Self {
        Self {
            rule_type: rule_type.into(),
            rule_name: rule_name.into(),
        }
    }

    /// Counter key used in [`Statistics::rules_triggered`](super::Statistics).
    pub fn key(&self) -> String {
        format!("[{}] {}", self.rule_type, self.rule_name)
    }
}

/// Finds rule-trigger markers in free-form response text.
pub trait RuleExtractor: Send + Sync {
    fn name(&self) -> &str;
    fn extract(&self, text: &str) -> Vec<RuleHit>;
}

/// Extractor that never reports anything.
pub struct NoRules;

impl RuleExtractor for NoRules {
    fn name(&self) -> &str {
        "none"
    }

    fn extract(&self, _text: &str) -> Vec<RuleHit> {
        Vec::new()
    }
}

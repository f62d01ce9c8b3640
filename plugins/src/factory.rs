use std::sync::Arc;

use anyhow::Result;

use observatory_core::config::{default_rule_pattern, AppConfig};
use observatory_core::policy::PathPolicy;
use observatory_core::stats::RuleExtractor;

use crate::policy::blocked_paths::BlockedPathPolicy;
use crate::rules::triggered_rule::RegexRuleExtractor;

pub fn build_rule_extractor(cfg: &AppConfig) -> Result<Arc<dyn RuleExtractor>> {
    let extractor = match RegexRuleExtractor::new(&cfg.rules.pattern) {
        Ok(extractor) => extractor,
        Err(e) => {
            // A bad pattern must not stop event collection.
            tracing::warn!(error = %e, "falling back to the default rule pattern");
            RegexRuleExtractor::new(&default_rule_pattern())?
        }
    };
    tracing::debug!(extractor = extractor.name(), "rule extractor ready");
    Ok(Arc::new(extractor))
}

pub fn build_policy(cfg: &AppConfig) -> Arc<dyn PathPolicy> {
    Arc::new(BlockedPathPolicy::new(&cfg.policy.blocked_patterns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use observatory_core::api::{block, AppContext, Services, DENY_EXIT};
    use observatory_core::config::RulesConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_rule_pattern_falls_back() {
        let cfg = AppConfig {
            rules: RulesConfig {
                pattern: "([".into(),
            },
            ..AppConfig::default()
        };
        let rules = build_rule_extractor(&cfg).unwrap();
        assert_eq!(rules.name(), "triggered-rule");
        assert_eq!(rules.extract("- (a) Triggered Rule: b").len(), 1);
    }

    #[test]
    fn default_policy_blocks_secrets_through_the_hook() {
        let cfg = AppConfig::default();
        let services = Services {
            policy: build_policy(&cfg),
            ..Services::default()
        };
        let ctx = AppContext::new(cfg, services);

        let denied = block(
            &ctx,
            r#"{"agent_action_name":"pre_read_code","tool_info":{"file_path":"/repo/config/secrets.yaml"}}"#,
        );
        assert_eq!(denied.exit_code, DENY_EXIT);
        assert_eq!(
            denied.stderr,
            "🔒 Blocked: AI cannot access files matching 'secrets'"
        );

        let allowed = block(
            &ctx,
            r#"{"agent_action_name":"pre_read_code","tool_info":{"file_path":"/repo/src/main.rs"}}"#,
        );
        assert_eq!(allowed.exit_code, 0);
        assert!(allowed.stderr.is_empty());
    }
}

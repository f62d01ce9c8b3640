use anyhow::Context;
use observatory_core::stats::{RuleExtractor, RuleHit};
use regex::Regex;

/// Finds rule markers with a two-group regex: group 1 is the rule type,
/// group 2 the rule name. The default pattern matches lines such as
/// `- (always_on) Triggered Rule: global_rules.md`.
pub struct RegexRuleExtractor {
    pattern: Regex,
}

impl RegexRuleExtractor {
    pub fn new(pattern: &str) -> anyhow::Result<Self> {
        let pattern =
            Regex::new(pattern).with_context(|| format!("invalid rule pattern {pattern:?}"))?;
        Ok(Self { pattern })
    }
}

impl RuleExtractor for RegexRuleExtractor {
    fn name(&self) -> &str {
        "triggered-rule"
    }

    fn extract(&self, text: &str) -> Vec<RuleHit> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let rule_type = caps.get(1)?.as_str().trim();
                let rule_name = caps.get(2)?.as_str().trim();
                Some(RuleHit::new(rule_type, rule_name))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use observatory_core::config::default_rule_pattern;
    use pretty_assertions::assert_eq;

    fn extractor() -> RegexRuleExtractor {
        RegexRuleExtractor::new(&default_rule_pattern()).unwrap()
    }

    #[test]
    fn finds_every_marker_line() {
        let text = "Done.\n\
                    - (always_on) Triggered Rule: global_rules.md\n\
                    - (model_decision) Triggered Rule: testing.md   \n\
                    unrelated - (x) line";
        let keys: Vec<String> = extractor().extract(text).iter().map(RuleHit::key).collect();
        assert_eq!(
            keys,
            vec!["[always_on] global_rules.md", "[model_decision] testing.md"]
        );
    }

    #[test]
    fn marker_may_be_indented() {
        let hits = extractor().extract("  - (glob) Triggered Rule: rust.md");
        assert_eq!(hits, vec![RuleHit::new("glob", "rust.md")]);
    }

    #[test]
    fn plain_text_has_no_hits() {
        assert!(extractor().extract("no rules were triggered").is_empty());
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn rejects_invalid_pattern() {
        assert!(RegexRuleExtractor::new("(unclosed").is_err());
    }
}

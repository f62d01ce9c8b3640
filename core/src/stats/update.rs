use crate::config::StatsConfig;
use crate::event::HookEvent;
use crate::util::{file_name_of, truncate_chars, truncate_front};

use super::model::{CommandRecord, SessionSummary, Statistics};
use super::rules::RuleExtractor;

const COMMAND_PREVIEW: usize = 200;
const CWD_PREVIEW: usize = 100;

/// Folds one event into `stats` and enforces the retention caps.
///
/// `now` stands in for the event timestamp when the host did not send one.
pub fn apply(
    mut stats: Statistics,
    event: &HookEvent,
    rules: &dyn RuleExtractor,
    limits: &StatsConfig,
    now: &str,
) -> Statistics {
    let kind = event.hook_kind();
    let timestamp = event
        .timestamp
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(now)
        .to_string();

    stats.total_events += 1;
    *stats.events_by_type.entry(event.kind.clone()).or_insert(0) += 1;
    if stats.first_event.is_none() {
        stats.first_event = Some(timestamp.clone());
    }
    stats.last_updated = Some(timestamp.clone());

    let session = stats
        .sessions
        .entry(event.session_id.clone())
        .or_insert_with(|| SessionSummary {
            first_seen: timestamp.clone(),
            ..SessionSummary::default()
        });
    session.event_count += 1;
    session.last_seen = timestamp.clone();
    *session.events.entry(event.kind.clone()).or_insert(0) += 1;

    if kind.is_file_access() {
        if let Some(path) = event.file_path() {
            let name = file_name_of(path).to_string();
            *stats.files_accessed.entry(name).or_insert(0) += 1;
        }
    }

    if kind.is_command() {
        if let Some(cmd) = event.command_line() {
            let record = CommandRecord {
                cmd: truncate_chars(cmd, COMMAND_PREVIEW).to_string(),
                time: timestamp.clone(),
                cwd: truncate_chars(event.payload_str("cwd").unwrap_or(""), CWD_PREVIEW)
                    .to_string(),
            };
            stats.commands_executed.push(record);
        }
    }

    if kind.is_response() {
        let response = event.payload_str("response").unwrap_or("");
        for hit in rules.extract(response) {
            *stats.rules_triggered.entry(hit.key()).or_insert(0) += 1;
        }
    }

    enforce_retention(&mut stats, limits);
    stats
}

/// Keeps the most recently active sessions, the most accessed files and the
/// newest commands.
pub fn enforce_retention(stats: &mut Statistics, limits: &StatsConfig) {
    if stats.sessions.len() > limits.max_sessions {
        let keep: Vec<String> = stats
            .sessions_by_recency()
            .into_iter()
            .take(limits.max_sessions)
            .map(|(id, _)| id.clone())
            .collect();
        stats.sessions.retain(|id, _| keep.contains(id));
    }

    if stats.files_accessed.len() > limits.max_files {
        let keep: Vec<String> = Statistics::ranked(&stats.files_accessed)
            .into_iter()
            .take(limits.max_files)
            .map(|(name, _)| name.clone())
            .collect();
        stats.files_accessed.retain(|name, _| keep.contains(name));
    }

    // Also trims a loaded document after the cap was lowered.
    truncate_front(&mut stats.commands_executed, limits.max_commands);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::rules::{NoRules, RuleHit};
    use pretty_assertions::assert_eq;

    struct FixedRules(Vec<RuleHit>);

    impl RuleExtractor for FixedRules {
        fn name(&self) -> &str {
            "fixed"
        }

        fn extract(&self, text: &str) -> Vec<RuleHit> {
            if text.is_empty() {
                Vec::new()
            } else {
                self.0.clone()
            }
        }
    }

    fn limits() -> StatsConfig {
        StatsConfig::default()
    }

    fn at(kind: &str, session: &str, ts: &str) -> HookEvent {
        HookEvent::new(kind, session).with_timestamp(ts)
    }

    #[test]
    fn counts_increment_by_one() {
        let mut stats = Statistics::default();
        for i in 0..3 {
            let before_total = stats.total_events;
            let before_kind = stats.events_by_type.get("pre_user_prompt").copied().unwrap_or(0);
            stats = apply(
                stats,
                &at("pre_user_prompt", "s", &format!("2026-01-01T00:00:0{i}")),
                &NoRules,
                &limits(),
                "now",
            );
            assert_eq!(stats.total_events, before_total + 1);
            assert_eq!(stats.events_by_type["pre_user_prompt"], before_kind + 1);
        }
        assert_eq!(stats.first_event.as_deref(), Some("2026-01-01T00:00:00"));
        assert_eq!(stats.last_updated.as_deref(), Some("2026-01-01T00:00:02"));
    }

    #[test]
    fn tracks_sessions() {
        let mut stats = Statistics::default();
        stats = apply(stats, &at("pre_read_code", "a", "t1"), &NoRules, &limits(), "now");
        stats = apply(stats, &at("post_read_code", "a", "t2"), &NoRules, &limits(), "now");

        let s = &stats.sessions["a"];
        assert_eq!(s.first_seen, "t1");
        assert_eq!(s.last_seen, "t2");
        assert_eq!(s.event_count, 2);
        assert_eq!(s.events["pre_read_code"], 1);
        assert_eq!(s.events["post_read_code"], 1);
    }

    #[test]
    fn missing_timestamp_uses_now() {
        let stats = apply(
            Statistics::default(),
            &HookEvent::new("pre_user_prompt", "s"),
            &NoRules,
            &limits(),
            "2026-05-05T10:00:00",
        );
        assert_eq!(stats.sessions["s"].first_seen, "2026-05-05T10:00:00");
    }

    #[test]
    fn counts_file_names_for_file_access_only() {
        let mut stats = Statistics::default();
        let write = at("post_write_code", "s", "t").with_payload("file_path", "C:\\a\\b\\lib.rs");
        let read = at("pre_read_code", "s", "t").with_payload("file_path", "/x/lib.rs");
        let cmd = at("post_run_command", "s", "t").with_payload("file_path", "/x/other.rs");
        for ev in [&write, &read, &cmd] {
            stats = apply(stats, ev, &NoRules, &limits(), "now");
        }
        assert_eq!(stats.files_accessed.len(), 1);
        assert_eq!(stats.files_accessed["lib.rs"], 2);
    }

    #[test]
    fn records_commands_in_bounded_ring() {
        let cfg = StatsConfig {
            max_commands: 3,
            ..StatsConfig::default()
        };
        let mut stats = Statistics::default();
        for i in 0..5 {
            let ev = at("post_run_command", "s", &format!("t{i}"))
                .with_payload("command_line", format!("cargo test {i}"))
                .with_payload("cwd", "/repo");
            stats = apply(stats, &ev, &NoRules, &cfg, "now");
        }
        let cmds: Vec<&str> = stats.commands_executed.iter().map(|c| c.cmd.as_str()).collect();
        assert_eq!(cmds, vec!["cargo test 2", "cargo test 3", "cargo test 4"]);
        assert_eq!(stats.commands_executed[0].cwd, "/repo");
    }

    #[test]
    fn lowered_command_cap_trims_existing_history() {
        let mut stats = Statistics::default();
        for i in 0..5 {
            let ev = at("post_run_command", "s", "t").with_payload("command_line", format!("make {i}"));
            stats = apply(stats, &ev, &NoRules, &limits(), "now");
        }
        let lowered = StatsConfig {
            max_commands: 2,
            ..StatsConfig::default()
        };
        stats = apply(stats, &at("pre_user_prompt", "s", "t"), &NoRules, &lowered, "now");

        let cmds: Vec<&str> = stats.commands_executed.iter().map(|c| c.cmd.as_str()).collect();
        assert_eq!(cmds, vec!["make 3", "make 4"]);
    }

    #[test]
    fn long_commands_are_cut() {
        let ev = at("post_run_command", "s", "t").with_payload("command_line", "x".repeat(500));
        let stats = apply(Statistics::default(), &ev, &NoRules, &limits(), "now");
        assert_eq!(stats.commands_executed[0].cmd.chars().count(), 200);
    }

    #[test]
    fn counts_rule_hits_from_responses() {
        let rules = FixedRules(vec![
            RuleHit::new("always_on", "global_rules.md"),
            RuleHit::new("model_decision", "testing.md"),
        ]);
        let ev = at("post_cascade_response", "s", "t").with_payload("response", "…");
        let mut stats = apply(Statistics::default(), &ev, &rules, &limits(), "now");
        stats = apply(stats, &ev, &rules, &limits(), "now");

        assert_eq!(stats.rules_triggered["[always_on] global_rules.md"], 2);
        assert_eq!(stats.rules_triggered["[model_decision] testing.md"], 2);
    }

    #[test]
    fn session_retention_keeps_most_recent() {
        let cfg = StatsConfig {
            max_sessions: 3,
            ..StatsConfig::default()
        };
        let mut stats = Statistics::default();
        for i in 0..6 {
            let ev = at("pre_user_prompt", &format!("s{i}"), &format!("2026-01-01T00:00:0{i}"));
            stats = apply(stats, &ev, &NoRules, &cfg, "now");
        }
        // Touch s0 again so it becomes the most recent.
        stats = apply(
            stats,
            &at("pre_user_prompt", "s0", "2026-01-01T00:00:09"),
            &NoRules,
            &cfg,
            "now",
        );

        let mut ids: Vec<&str> = stats.sessions.keys().map(String::as_str).collect();
        ids.sort();
        assert_eq!(ids, vec!["s0", "s4", "s5"]);
    }

    #[test]
    fn file_retention_keeps_top_counts() {
        let cfg = StatsConfig {
            max_files: 2,
            ..StatsConfig::default()
        };
        let mut stats = Statistics::default();
        let touches = [("a.rs", 3), ("c.rs", 2), ("b.rs", 1)];
        for (name, n) in touches {
            for _ in 0..n {
                let ev = at("post_read_code", "s", "t").with_payload("file_path", name);
                stats = apply(stats, &ev, &NoRules, &cfg, "now");
            }
        }
        let names: Vec<&str> = stats.files_accessed.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a.rs", "c.rs"]);
    }
}

use crate::event::HookEvent;

use super::outcome::HookOutcome;

/// Parses the event a hook received on stdin. Anything unusable becomes an
/// allowing outcome with the reason on stderr.
pub fn parse_event(hook: &str, raw: &str) -> Result<HookEvent, HookOutcome> {
    if raw.trim().is_empty() {
        tracing::warn!(hook, "empty hook payload");
        return Err(HookOutcome::diagnostic(format!(
            "[Observatory] {hook}: no event on stdin"
        )));
    }
    HookEvent::from_json(raw).map_err(|e| {
        tracing::warn!(hook, error = %e, "unparseable hook payload");
        HookOutcome::diagnostic(format!("[Observatory] {hook}: JSON parse error: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_malformed_input_allow() {
        for raw in ["", "  \n", "{not json", "42"] {
            let outcome = parse_event("observe", raw).unwrap_err();
            assert_eq!(outcome.exit_code, 0);
            assert!(outcome.stderr.starts_with("[Observatory] observe:"));
            assert!(outcome.stdout.is_empty());
        }
    }

    #[test]
    fn parses_object() {
        let ev = parse_event("observe", r#"{"agent_action_name":"pre_read_code"}"#).unwrap();
        assert_eq!(ev.kind, "pre_read_code");
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::kind::HookKind;

pub const UNKNOWN: &str = "unknown";

/// One hook invocation as delivered on stdin.
///
/// Fields the observatory does not interpret are kept in `extra` so the
/// event store records the payload verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HookEvent {
    #[serde(rename = "agent_action_name", default = "unknown", deserialize_with = "string_or_unknown")]
    pub kind: String,

    #[serde(rename = "trajectory_id", default = "unknown", deserialize_with = "string_or_unknown")]
    pub session_id: String,

    #[serde(default, deserialize_with = "optional_string", skip_serializing_if = "Option::is_none")]
    pub execution_id: Option<String>,

    #[serde(default, deserialize_with = "optional_string", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(rename = "tool_info", default, deserialize_with = "object_or_empty")]
    pub payload: Map<String, Value>,

    /// Stamped by the event store on append.
    #[serde(
        rename = "_logged_at",
        default,
        deserialize_with = "optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub logged_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

fn string_or_unknown<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => unknown(),
    })
}

/// Numbers are kept as their decimal text; any other non-string is dropped.
fn optional_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn object_or_empty<'de, D>(de: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(de)?;
    Ok(match v {
        Some(Value::Object(m)) => m,
        _ => Map::new(),
    })
}

impl HookEvent {
    pub fn new(kind: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            session_id: session_id.into(),
            execution_id: None,
            timestamp: None,
            payload: Map::new(),
            logged_at: None,
            extra: Map::new(),
        }
    }

    /// Parses a raw stdin payload. Only a JSON object is accepted.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Compact single-line JSON, as stored in the event log.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn hook_kind(&self) -> HookKind {
        HookKind::from_name(&self.kind)
    }

    pub fn with_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = Some(ts.into());
        self
    }

    pub fn with_payload(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }

    /// A string field of `tool_info`, if present and a string.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }

    pub fn has_payload(&self, key: &str) -> bool {
        self.payload.contains_key(key)
    }

    pub fn file_path(&self) -> Option<&str> {
        self.payload_str("file_path").filter(|s| !s.is_empty())
    }

    pub fn command_line(&self) -> Option<&str> {
        self.payload_str("command_line").filter(|s| !s.is_empty())
    }

    /// Timestamp shown on the dashboard: the host's, else the store's.
    pub fn display_timestamp(&self) -> Option<&str> {
        self.timestamp
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.logged_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_windsurf_payload() {
        let raw = r#"{
            "agent_action_name": "post_write_code",
            "trajectory_id": "traj-1",
            "execution_id": "exec-9",
            "timestamp": "2026-01-02T03:04:05",
            "tool_info": {"file_path": "C:\\repo\\src\\main.rs", "edits": []},
            "model_name": "swe-1"
        }"#;
        let ev = HookEvent::from_json(raw).unwrap();

        assert_eq!(ev.kind, "post_write_code");
        assert_eq!(ev.session_id, "traj-1");
        assert_eq!(ev.execution_id.as_deref(), Some("exec-9"));
        assert_eq!(ev.file_path(), Some("C:\\repo\\src\\main.rs"));
        assert_eq!(ev.extra.get("model_name"), Some(&Value::from("swe-1")));
        assert!(ev.hook_kind().is_file_access());
    }

    #[test]
    fn missing_fields_default_to_unknown() {
        let ev = HookEvent::from_json(r#"{"tool_info": null}"#).unwrap();
        assert_eq!(ev.kind, UNKNOWN);
        assert_eq!(ev.session_id, UNKNOWN);
        assert!(ev.payload.is_empty());
    }

    #[test]
    fn non_string_metadata_does_not_fail_the_parse() {
        let raw = r#"{
            "agent_action_name": "pre_read_code",
            "execution_id": 42,
            "timestamp": 1712000000,
            "_logged_at": {"at": "now"},
            "tool_info": {"file_path": "/app/secrets/db.yml"}
        }"#;
        let ev = HookEvent::from_json(raw).unwrap();

        assert_eq!(ev.execution_id.as_deref(), Some("42"));
        assert_eq!(ev.timestamp.as_deref(), Some("1712000000"));
        assert_eq!(ev.logged_at, None);
        assert_eq!(ev.file_path(), Some("/app/secrets/db.yml"));
    }

    #[test]
    fn rejects_non_objects() {
        assert!(HookEvent::from_json("not json").is_err());
        assert!(HookEvent::from_json("[1,2]").is_err());
    }

    #[test]
    fn line_keeps_unknown_fields() {
        let raw = r#"{"agent_action_name":"pre_user_prompt","trajectory_id":"t","tool_info":{"user_prompt":"hi"},"custom":1}"#;
        let ev = HookEvent::from_json(raw).unwrap();
        let line = ev.to_line().unwrap();
        assert!(!line.contains('\n'));

        let back: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(back["custom"], Value::from(1));
        assert_eq!(back["tool_info"]["user_prompt"], Value::from("hi"));
    }
}

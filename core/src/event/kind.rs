use std::fmt;

/// Action kinds the IDE reports through `agent_action_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HookKind {
    PreReadCode,
    PostReadCode,
    PreWriteCode,
    PostWriteCode,
    PreRunCommand,
    PostRunCommand,
    PreMcpToolUse,
    PostMcpToolUse,
    PreUserPrompt,
    PostCascadeResponse,
    PostSetupWorktree,
    Other(String),
}

impl HookKind {
    pub fn from_name(s: &str) -> HookKind {
        match s {
            "pre_read_code" => HookKind::PreReadCode,
            "post_read_code" => HookKind::PostReadCode,
            "pre_write_code" => HookKind::PreWriteCode,
            "post_write_code" => HookKind::PostWriteCode,
            "pre_run_command" => HookKind::PreRunCommand,
            "post_run_command" => HookKind::PostRunCommand,
            "pre_mcp_tool_use" => HookKind::PreMcpToolUse,
            "post_mcp_tool_use" => HookKind::PostMcpToolUse,
            "pre_user_prompt" => HookKind::PreUserPrompt,
            "post_cascade_response" => HookKind::PostCascadeResponse,
            "post_setup_worktree" => HookKind::PostSetupWorktree,
            other => HookKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HookKind::PreReadCode => "pre_read_code",
            HookKind::PostReadCode => "post_read_code",
            HookKind::PreWriteCode => "pre_write_code",
            HookKind::PostWriteCode => "post_write_code",
            HookKind::PreRunCommand => "pre_run_command",
            HookKind::PostRunCommand => "post_run_command",
            HookKind::PreMcpToolUse => "pre_mcp_tool_use",
            HookKind::PostMcpToolUse => "post_mcp_tool_use",
            HookKind::PreUserPrompt => "pre_user_prompt",
            HookKind::PostCascadeResponse => "post_cascade_response",
            HookKind::PostSetupWorktree => "post_setup_worktree",
            HookKind::Other(s) => s.as_str(),
        }
    }

    /// Read or write of a source file, before or after the fact.
    pub fn is_file_access(&self) -> bool {
        matches!(
            self,
            HookKind::PreReadCode
                | HookKind::PostReadCode
                | HookKind::PreWriteCode
                | HookKind::PostWriteCode
        )
    }

    pub fn is_command(&self) -> bool {
        matches!(self, HookKind::PostRunCommand)
    }

    pub fn is_response(&self) -> bool {
        matches!(self, HookKind::PostCascadeResponse)
    }

    /// Human label for the dashboard's distribution bars.
    pub fn label(&self) -> String {
        let label = match self {
            HookKind::PreReadCode => "📖 Read file (pre)",
            HookKind::PostReadCode => "📖 Read file (post)",
            HookKind::PreWriteCode => "✏️ Write code (pre)",
            HookKind::PostWriteCode => "✏️ Write code (post)",
            HookKind::PreRunCommand => "⚡ Run command (pre)",
            HookKind::PostRunCommand => "⚡ Run command (post)",
            HookKind::PreMcpToolUse => "🔧 MCP tool (pre)",
            HookKind::PostMcpToolUse => "🔧 MCP tool (post)",
            HookKind::PreUserPrompt => "💬 User prompt (pre)",
            HookKind::PostCascadeResponse => "🤖 AI response (post)",
            HookKind::PostSetupWorktree => "🌲 Worktree (post)",
            HookKind::Other(s) => return s.clone(),
        };
        label.to_string()
    }

    /// Icon for the recent-operations feed, keyed on the raw action name so
    /// unknown kinds still get a sensible glyph.
    pub fn icon(name: &str) -> &'static str {
        if name.contains("read") {
            "📖"
        } else if name.contains("write") {
            "✏️"
        } else if name.contains("command") {
            "⚡"
        } else if name.contains("mcp") {
            "🔧"
        } else if name.contains("prompt") {
            "💬"
        } else if name.contains("response") {
            "🤖"
        } else {
            "📌"
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for name in [
            "pre_read_code",
            "post_write_code",
            "post_run_command",
            "post_cascade_response",
            "post_setup_worktree",
        ] {
            assert_eq!(HookKind::from_name(name).as_str(), name);
        }
        assert_eq!(
            HookKind::from_name("something_new"),
            HookKind::Other("something_new".into())
        );
    }

    #[test]
    fn classifies_kinds() {
        assert!(HookKind::PreWriteCode.is_file_access());
        assert!(!HookKind::PreRunCommand.is_file_access());
        assert!(HookKind::PostRunCommand.is_command());
        assert!(!HookKind::PreRunCommand.is_command());
        assert!(HookKind::PostCascadeResponse.is_response());
    }

    #[test]
    fn icon_matches_action_name() {
        assert_eq!(HookKind::icon("post_read_code"), "📖");
        assert_eq!(HookKind::icon("pre_mcp_tool_use"), "🔧");
        assert_eq!(HookKind::icon("mystery"), "📌");
    }
}

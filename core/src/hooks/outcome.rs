/// Exit status the host treats as "block this action".
pub const DENY_EXIT: i32 = 2;

/// What a hook hands back to the host: two text streams and an exit status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl HookOutcome {
    pub fn allow() -> Self {
        Self::default()
    }

    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            stderr: reason.into(),
            exit_code: DENY_EXIT,
            ..Self::default()
        }
    }

    /// A problem worth reporting that must not stop the agent.
    pub fn diagnostic(message: impl Into<String>) -> Self {
        Self {
            stderr: message.into(),
            ..Self::default()
        }
    }

    pub fn is_deny(&self) -> bool {
        self.exit_code == DENY_EXIT
    }
}

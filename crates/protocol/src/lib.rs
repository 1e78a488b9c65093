use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable error codes surfaced in [`ErrorEnvelope::code`].
pub mod codes {
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const MALFORMED_INPUT: &str = "malformed_input";
    pub const NOT_FOUND: &str = "not_found";
    pub const STORE_FAILURE: &str = "store_failure";
    pub const INTERNAL: &str = "internal";

    pub const ALL: &[&str] = &[INVALID_INPUT, MALFORMED_INPUT, NOT_FOUND, STORE_FAILURE, INTERNAL];
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ToolNextAction {
    pub tool: String,
    pub args: serde_json::Value,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
    #[serde(default)]
    pub next_actions: Vec<ToolNextAction>,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
            hint: None,
            next_actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    #[must_use]
    pub fn with_next_action(mut self, action: ToolNextAction) -> Self {
        self.next_actions.push(action);
        self
    }
}

use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for the `help` tool.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct HelpRequest {
    /// Optional topic selector ("legend", "tools", "flow", "scoring")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct NewSpecializationScriptRequest {
    /// Description of the new specialization
    #[schemars(description = "Description of the new specialization")]
    #[serde(default)]
    pub description: String,

    /// Requested id (default: next free id)
    #[schemars(
        description = "Requested id; when omitted or already taken, max(id_esp_tag) + 1 is used"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

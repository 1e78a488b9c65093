use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct SearchSpecializationsRequest {
    /// Substring to look for in specialization descriptions
    #[schemars(description = "Substring matched against specialization descriptions")]
    #[serde(default)]
    pub term: String,
}

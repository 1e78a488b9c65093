use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Arguments identifying one occurrence, as printed by `resolve_tag` for each candidate.
#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct LinkScriptRequest {
    #[schemars(description = "Specialization id (id_esp_tag) to link")]
    #[serde(default)]
    pub specialization_id: i64,

    #[schemars(description = "Message-type identifier (e.g. 'pacs.002')")]
    #[serde(default)]
    pub message_type: String,

    #[schemars(description = "Tag name of the occurrence")]
    #[serde(default)]
    pub tag: String,

    #[schemars(description = "Parent tag name; omit for root-level occurrences")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_tag: Option<String>,

    #[schemars(description = "num_seq_tag of the occurrence")]
    #[serde(default)]
    pub tag_seq: i64,

    #[schemars(description = "num_seq_msg_tag of the occurrence")]
    #[serde(default)]
    pub message_tag_seq: i64,
}

use rmcp::schemars;
use serde::{Deserialize, Serialize};

// Fields default to empty so a missing one is reported as invalid input, not a protocol error.
#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct ResolveTagRequest {
    /// Sample XML fragment containing the tag
    #[schemars(description = "Sample XML (a whole message or a fragment) that contains the tag")]
    #[serde(default)]
    pub xml_fragment: String,

    /// Element name to resolve
    #[schemars(
        description = "Element name to resolve; a namespace prefix is ignored (e.g. 'TxSts')"
    )]
    #[serde(default)]
    pub tag: String,

    /// Message-type identifier
    #[schemars(description = "Message-type identifier as stored in the registry (e.g. 'pacs.002')")]
    #[serde(default)]
    pub message_type: String,
}

use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct SituationScriptRequest {
    #[schemars(description = "Situation code (id_sit_msg_emi_des), e.g. 'RJCT'")]
    #[serde(default)]
    pub code: String,

    #[schemars(description = "Issuer/receiver type id (id_tip_emi_des)")]
    #[serde(default)]
    pub issuer_type_id: i64,

    #[schemars(description = "Message situation id (id_sit_msg)")]
    #[serde(default)]
    pub situation_id: i64,

    #[schemars(description = "Situation description")]
    #[serde(default)]
    pub description: String,

    /// Maintainer user code (default: 0)
    #[schemars(description = "Maintainer user code (cod_usu_ult_mnt); defaults to 0")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer_user_code: Option<i64>,
}

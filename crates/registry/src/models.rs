use serde::{Deserialize, Serialize};

/// A row of `spi_especializacao_tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: i64,
    pub description: String,
}

/// A row of `spi_sit_msg_emi_des`: a message situation for one issuer/recipient type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSituation {
    /// Situation code as it appears in the XML (e.g., "RJCT")
    pub code: String,
    pub issuer_type_id: i64,
    pub situation_id: i64,
    pub description: String,
    pub maintainer_user_code: i64,
}

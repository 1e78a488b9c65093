use crate::{escape_literal, require_positive, require_text, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Row for `spi_sit_msg_emi_des`, keyed by `(code, issuer_type_id, situation_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationInsert {
    pub code: String,
    pub issuer_type_id: i64,
    pub situation_id: i64,
    pub description: String,
    #[serde(default)]
    pub maintainer_user_code: i64,
}

impl SituationInsert {
    pub fn validate(&self) -> Result<()> {
        require_text("code", &self.code)?;
        require_text("description", &self.description)?;
        require_positive("issuer_type_id", self.issuer_type_id)?;
        require_positive("situation_id", self.situation_id)?;
        Ok(())
    }
}

pub fn situation_script(situation: &SituationInsert) -> Result<String> {
    situation.validate()?;

    let code = escape_literal(&situation.code);
    let description = escape_literal(&situation.description);

    let mut script = String::new();
    let _ = writeln!(script, "-- Register message issuer/receiver situation");
    let _ = writeln!(script, "-- Code: {}", situation.code);
    let _ = writeln!(script, "-- Issuer type: {}", situation.issuer_type_id);
    let _ = writeln!(script, "-- Situation: {}", situation.situation_id);
    script.push('\n');
    script.push_str("IF NOT EXISTS (SELECT 1\n");
    script.push_str("               FROM spi_sit_msg_emi_des\n");
    let _ = writeln!(script, "               WHERE id_sit_msg_emi_des = '{code}'");
    let _ = writeln!(
        script,
        "                 AND id_tip_emi_des = {}",
        situation.issuer_type_id
    );
    let _ = writeln!(
        script,
        "                 AND id_sit_msg = {})",
        situation.situation_id
    );
    script.push_str("BEGIN\n");
    script.push_str(
        "  INSERT INTO spi_sit_msg_emi_des (id_sit_msg_emi_des, id_tip_emi_des, id_sit_msg, dsc_sit_msg_emi_des, cod_usu_ult_mnt, dat_ult_mnt)\n",
    );
    let _ = writeln!(
        script,
        "  VALUES ('{code}', {}, {}, '{description}', {}, GETDATE())",
        situation.issuer_type_id, situation.situation_id, situation.maintainer_user_code
    );
    script.push_str("END");
    Ok(script)
}

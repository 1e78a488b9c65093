use crate::{escape_literal, require_positive, require_text, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Occurrence a specialization gets linked to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub specialization_id: i64,
    pub message_type: String,
    pub tag: String,
    /// Empty when the occurrence is root-level; omitted from the filters then
    pub parent_tag: String,
    pub tag_seq: i64,
    pub message_tag_seq: i64,
}

impl LinkTarget {
    pub fn validate(&self) -> Result<()> {
        require_positive("specialization_id", self.specialization_id)?;
        require_text("message_type", &self.message_type)?;
        require_text("tag", &self.tag)?;
        Ok(())
    }
}

/// Script linking a specialization to one occurrence in `spi_especializacao_msg_tag`.
pub fn link_script(target: &LinkTarget) -> Result<String> {
    target.validate()?;

    let message_type = escape_literal(&target.message_type);
    let tag = escape_literal(&target.tag);
    let parent = (!target.parent_tag.is_empty()).then(|| escape_literal(&target.parent_tag));

    let mut script = String::new();
    let _ = writeln!(script, "-- Link specialization to a message tag occurrence");
    let _ = writeln!(script, "-- Specialization id: {}", target.specialization_id);
    let _ = writeln!(script, "-- Message type: {}", target.message_type);
    let _ = writeln!(script, "-- Tag: {}", target.tag);
    if !target.parent_tag.is_empty() {
        let _ = writeln!(script, "-- Parent tag: {}", target.parent_tag);
    }
    let _ = writeln!(script, "-- Tag seq: {}", target.tag_seq);
    let _ = writeln!(script, "-- Message tag seq: {}", target.message_tag_seq);
    script.push('\n');

    script.push_str("IF NOT EXISTS (SELECT 1\n");
    script.push_str("               FROM spi_mensagem_tag mt\n");
    script.push_str("                    JOIN spi_especializacao_msg_tag em\n");
    script.push_str("                    ON em.num_seq_msg_tag = mt.num_seq_msg_tag\n");
    script.push_str("                   AND em.num_seq_tag = mt.num_seq_tag\n");
    script.push_str("                   AND em.id_eve_msg = mt.id_eve_msg\n");
    script.push_str("                   AND em.id_tip_msg = mt.id_tip_msg\n");
    script.push_str("                   AND em.id_tag = mt.id_tag\n");
    let _ = writeln!(script, "               WHERE mt.id_eve_msg = '{message_type}'");
    let _ = writeln!(script, "                 AND mt.id_tag = '{tag}'");
    if let Some(parent) = parent.as_deref() {
        let _ = writeln!(script, "                 AND mt.id_tag_pai = '{parent}'");
    }
    let _ = writeln!(script, "                 AND mt.num_seq_tag = {}", target.tag_seq);
    let _ = writeln!(
        script,
        "                 AND mt.num_seq_msg_tag = {}",
        target.message_tag_seq
    );
    let _ = writeln!(
        script,
        "                 AND em.id_esp_tag = {})",
        target.specialization_id
    );
    script.push_str("BEGIN\n");

    script.push_str(
        "  INSERT INTO spi_especializacao_msg_tag (id_esp_tag, id_eve_msg, id_tip_msg, id_tag, num_seq_tag, num_seq_msg_tag)\n",
    );
    let _ = writeln!(
        script,
        "  SELECT {}, id_eve_msg, id_tip_msg, id_tag, num_seq_tag, num_seq_msg_tag",
        target.specialization_id
    );
    script.push_str("  FROM spi_mensagem_tag\n");
    let _ = writeln!(script, "  WHERE id_eve_msg = '{message_type}'");
    let _ = writeln!(script, "    AND id_tag = '{tag}'");
    if let Some(parent) = parent.as_deref() {
        let _ = writeln!(script, "    AND id_tag_pai = '{parent}'");
    }
    let _ = writeln!(script, "    AND num_seq_tag = {}", target.tag_seq);
    let _ = writeln!(script, "    AND num_seq_msg_tag = {}", target.message_tag_seq);
    script.push_str("END");

    Ok(script)
}

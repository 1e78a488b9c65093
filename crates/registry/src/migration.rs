use rusqlite::Connection;

use crate::error::Result;

const SCHEMA_SQL: &str = r"
    PRAGMA journal_mode = WAL;

    CREATE TABLE IF NOT EXISTS spi_mensagem_tag (
        id_eve_msg TEXT NOT NULL,
        id_tip_msg TEXT NOT NULL,
        id_tag TEXT NOT NULL,
        id_tag_pai TEXT,
        num_seq_tag INTEGER NOT NULL,
        num_seq_msg_tag INTEGER NOT NULL,
        PRIMARY KEY (id_eve_msg, id_tag, num_seq_tag, num_seq_msg_tag)
    );

    CREATE INDEX IF NOT EXISTS idx_mensagem_tag_lookup
    ON spi_mensagem_tag(id_tag, id_eve_msg, num_seq_tag);

    CREATE TABLE IF NOT EXISTS spi_especializacao_tag (
        id_esp_tag INTEGER PRIMARY KEY,
        dsc_esp_tag TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS spi_especializacao_msg_tag (
        id_esp_tag INTEGER NOT NULL,
        id_eve_msg TEXT NOT NULL,
        id_tip_msg TEXT NOT NULL,
        id_tag TEXT NOT NULL,
        num_seq_tag INTEGER NOT NULL,
        num_seq_msg_tag INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS spi_sit_msg_emi_des (
        id_sit_msg_emi_des TEXT NOT NULL,
        id_tip_emi_des INTEGER NOT NULL,
        id_sit_msg INTEGER NOT NULL,
        dsc_sit_msg_emi_des TEXT NOT NULL,
        cod_usu_ult_mnt INTEGER NOT NULL DEFAULT 0,
        dat_ult_mnt TEXT NOT NULL,
        PRIMARY KEY (id_sit_msg_emi_des, id_tip_emi_des, id_sit_msg)
    );
";

pub(crate) fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

use std::path::Path;
use std::sync::{Arc, Mutex};

use esptag_resolver::{ParentLink, StoreError, TagOccurrence, TagRegistry};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{RegistryError, Result};
use crate::migration::migrate;
use crate::models::{MessageSituation, Specialization};

#[derive(Clone)]
pub struct SqliteRegistry {
    conn: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteRegistry").finish_non_exhaustive()
    }
}

impl SqliteRegistry {
    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?;
        f(&conn)
    }

    /// Open (or create) the registry at `path`, creating the schema when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        migrate(&conn)?;
        log::debug!("opened tag registry at {}", path.display());
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrate(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    // ------------------------------------------------------------------
    // Tag occurrences
    // ------------------------------------------------------------------

    pub fn insert_occurrence(&self, occurrence: &TagOccurrence) -> Result<()> {
        let parent = occurrence
            .has_parent()
            .then_some(occurrence.parent_tag.as_str());
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO spi_mensagem_tag
                    (id_eve_msg, id_tip_msg, id_tag, id_tag_pai, num_seq_tag, num_seq_msg_tag)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ",
                params![
                    occurrence.message_type,
                    occurrence.message_subtype,
                    occurrence.tag,
                    parent,
                    occurrence.tag_seq,
                    occurrence.message_tag_seq,
                ],
            )?;
            Ok(())
        })
    }

    pub fn occurrences(&self, tag: &str, message_type: &str) -> Result<Vec<TagOccurrence>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id_eve_msg, id_tip_msg, id_tag, COALESCE(id_tag_pai, ''),
                       num_seq_tag, num_seq_msg_tag
                FROM spi_mensagem_tag
                WHERE id_tag = ?1 AND id_eve_msg = ?2
                ORDER BY rowid ASC
                ",
            )?;
            let rows = stmt.query_map(params![tag, message_type], occurrence_from_row)?;

            let mut occurrences = Vec::new();
            for row in rows {
                occurrences.push(row?);
            }
            Ok(occurrences)
        })
    }

    /// Parent of the occurrence `(tag, message_type, num_seq_tag = seq)`.
    ///
    /// Returns the occurrence's parent name and its `num_seq_msg_tag`, which is the
    /// `num_seq_tag` of the parent's own occurrence.
    pub fn parent_of(&self, tag: &str, message_type: &str, seq: i64) -> Result<Option<ParentLink>> {
        self.with_conn(|conn| {
            let link = conn
                .query_row(
                    r"
                    SELECT COALESCE(id_tag_pai, ''), num_seq_msg_tag
                    FROM spi_mensagem_tag
                    WHERE id_tag = ?1 AND id_eve_msg = ?2 AND num_seq_tag = ?3
                    ORDER BY num_seq_msg_tag ASC
                    LIMIT 1
                    ",
                    params![tag, message_type, seq],
                    |row| {
                        Ok(ParentLink {
                            parent_tag: row.get(0)?,
                            parent_seq: row.get(1)?,
                        })
                    },
                )
                .optional()?;
            Ok(link)
        })
    }

    // ------------------------------------------------------------------
    // Specializations
    // ------------------------------------------------------------------

    pub fn insert_specialization(&self, specialization: &Specialization) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO spi_especializacao_tag (id_esp_tag, dsc_esp_tag) VALUES (?1, ?2)",
                params![specialization.id, specialization.description],
            )?;
            Ok(())
        })
    }

    /// Specializations whose description contains `term`, ordered by description.
    pub fn search_specializations(&self, term: &str) -> Result<Vec<Specialization>> {
        let pattern = format!("%{}%", escape_like(term));
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r"
                SELECT id_esp_tag, dsc_esp_tag
                FROM spi_especializacao_tag
                WHERE dsc_esp_tag LIKE ?1 ESCAPE '\'
                ORDER BY dsc_esp_tag
                ",
            )?;
            let rows = stmt.query_map(params![pattern], |row| {
                Ok(Specialization {
                    id: row.get(0)?,
                    description: row.get(1)?,
                })
            })?;

            let mut found = Vec::new();
            for row in rows {
                found.push(row?);
            }
            Ok(found)
        })
    }

    pub fn specialization_exists(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let exists = conn
                .query_row(
                    "SELECT 1 FROM spi_especializacao_tag WHERE id_esp_tag = ?1",
                    params![id],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            Ok(exists)
        })
    }

    /// `max(id_esp_tag) + 1`, or 1 for an empty table.
    pub fn next_specialization_id(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let next = conn.query_row(
                "SELECT COALESCE(MAX(id_esp_tag), 0) + 1 FROM spi_especializacao_tag",
                [],
                |row| row.get(0),
            )?;
            Ok(next)
        })
    }

    // ------------------------------------------------------------------
    // Message situations
    // ------------------------------------------------------------------

    pub fn insert_situation(&self, situation: &MessageSituation) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r"
                INSERT INTO spi_sit_msg_emi_des
                    (id_sit_msg_emi_des, id_tip_emi_des, id_sit_msg,
                     dsc_sit_msg_emi_des, cod_usu_ult_mnt, dat_ult_mnt)
                VALUES (?1, ?2, ?3, ?4, ?5, datetime('now'))
                ",
                params![
                    situation.code,
                    situation.issuer_type_id,
                    situation.situation_id,
                    situation.description,
                    situation.maintainer_user_code,
                ],
            )?;
            Ok(())
        })
    }

    pub fn situation_exists(
        &self,
        code: &str,
        issuer_type_id: i64,
        situation_id: i64,
    ) -> Result<bool> {
        self.with_conn(|conn| {
            let exists = conn
                .query_row(
                    r"
                    SELECT 1
                    FROM spi_sit_msg_emi_des
                    WHERE id_sit_msg_emi_des = ?1
                      AND id_tip_emi_des = ?2
                      AND id_sit_msg = ?3
                    ",
                    params![code, issuer_type_id, situation_id],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            Ok(exists)
        })
    }
}

impl TagRegistry for SqliteRegistry {
    fn find_occurrences(
        &self,
        tag: &str,
        message_type: &str,
    ) -> std::result::Result<Vec<TagOccurrence>, StoreError> {
        self.occurrences(tag, message_type).map_err(Into::into)
    }

    fn find_parent(
        &self,
        tag: &str,
        message_type: &str,
        seq: i64,
    ) -> std::result::Result<Option<ParentLink>, StoreError> {
        self.parent_of(tag, message_type, seq).map_err(Into::into)
    }
}

fn occurrence_from_row(row: &Row<'_>) -> rusqlite::Result<TagOccurrence> {
    Ok(TagOccurrence {
        message_type: row.get(0)?,
        message_subtype: row.get(1)?,
        tag: row.get(2)?,
        parent_tag: row.get(3)?,
        tag_seq: row.get(4)?,
        message_tag_seq: row.get(5)?,
    })
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

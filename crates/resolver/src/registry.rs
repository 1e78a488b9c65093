use crate::error::StoreError;
use crate::types::TagOccurrence;

/// Parent pointer returned by a registry hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink {
    /// Parent tag name; empty when the occurrence is root-level
    pub parent_tag: String,

    /// Sequence number to carry into the next hop
    pub parent_seq: i64,
}

/// Read-only capability over the tag registry.
///
/// The engine only ever reads through this trait, so it can run against the relational store
/// in production and against [`InMemoryRegistry`] in tests.
pub trait TagRegistry {
    /// All occurrences of `tag` within `message_type`, in store order. No parent filter.
    fn find_occurrences(
        &self,
        tag: &str,
        message_type: &str,
    ) -> Result<Vec<TagOccurrence>, StoreError>;

    /// The parent of the occurrence keyed by `(tag, message_type, seq)`.
    ///
    /// Must be deterministic for a given key triple.
    fn find_parent(
        &self,
        tag: &str,
        message_type: &str,
        seq: i64,
    ) -> Result<Option<ParentLink>, StoreError>;
}

impl<T: TagRegistry + ?Sized> TagRegistry for &T {
    fn find_occurrences(
        &self,
        tag: &str,
        message_type: &str,
    ) -> Result<Vec<TagOccurrence>, StoreError> {
        (**self).find_occurrences(tag, message_type)
    }

    fn find_parent(
        &self,
        tag: &str,
        message_type: &str,
        seq: i64,
    ) -> Result<Option<ParentLink>, StoreError> {
        (**self).find_parent(tag, message_type, seq)
    }
}

/// Registry held in memory, keyed the same way as the relational store.
///
/// An occurrence's `message_tag_seq` names the `tag_seq` of its parent occurrence, so
/// `find_parent(tag, message_type, seq)` matches rows on `tag_seq` and hands back the row's
/// `message_tag_seq` as the key for the next level up.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    rows: Vec<TagOccurrence>,
    failing_parent_lookups: Vec<(String, i64)>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = TagOccurrence>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            failing_parent_lookups: Vec::new(),
        }
    }

    pub fn insert(&mut self, row: TagOccurrence) {
        self.rows.push(row);
    }

    /// Make `find_parent(tag, _, seq)` fail, to exercise degraded chains.
    pub fn fail_parent_lookup(&mut self, tag: impl Into<String>, seq: i64) {
        self.failing_parent_lookups.push((tag.into(), seq));
    }
}

impl TagRegistry for InMemoryRegistry {
    fn find_occurrences(
        &self,
        tag: &str,
        message_type: &str,
    ) -> Result<Vec<TagOccurrence>, StoreError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.tag == tag && row.message_type == message_type)
            .cloned()
            .collect())
    }

    fn find_parent(
        &self,
        tag: &str,
        message_type: &str,
        seq: i64,
    ) -> Result<Option<ParentLink>, StoreError> {
        if self
            .failing_parent_lookups
            .iter()
            .any(|(failing_tag, failing_seq)| failing_tag == tag && *failing_seq == seq)
        {
            return Err(StoreError::new(format!(
                "parent lookup failed for {tag}#{seq}"
            )));
        }

        Ok(self
            .rows
            .iter()
            .filter(|row| row.tag == tag && row.message_type == message_type && row.tag_seq == seq)
            .min_by_key(|row| row.message_tag_seq)
            .map(|row| ParentLink {
                parent_tag: row.parent_tag.clone(),
                parent_seq: row.message_tag_seq,
            }))
    }
}

use serde::{Deserialize, Serialize};

/// One stored row describing where a tag occurs within a message type's structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOccurrence {
    /// Message-type identifier (e.g., "pacs.002")
    pub message_type: String,

    /// Message-subtype identifier
    pub message_subtype: String,

    /// Tag name (e.g., "TxSts")
    pub tag: String,

    /// Parent tag name; empty for root-level tags
    pub parent_tag: String,

    /// Position of this tag among siblings/levels
    pub tag_seq: i64,

    /// Join key used to reach the next ancestor level
    pub message_tag_seq: i64,
}

impl TagOccurrence {
    pub fn has_parent(&self) -> bool {
        !self.parent_tag.is_empty()
    }
}

/// Ancestor path of the target element as observed in the sample XML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedPath {
    /// Immediate parent local name; empty when the target is the document root
    pub parent: String,

    /// Local names from the document root down to the target, inclusive
    pub path: Vec<String>,
}

/// Why a chain walk stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ChainEnd {
    /// Reached an occurrence with no parent.
    Root,

    /// The registry had no row for the next hop.
    ParentNotFound,

    /// Stopped after the maximum number of hops. The last tag reached may or may not be
    /// the root; completeness is unknown.
    HopLimit,

    /// The registry failed mid-walk; the chain is the prefix built so far.
    StoreError(String),
}

/// Ordered tag names from outermost to innermost, ending at a specific occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorChain {
    pub tags: Vec<String>,
    pub end: ChainEnd,
}

impl AncestorChain {
    /// True only when the walk confirmed the root. A [`ChainEnd::HopLimit`] chain is never
    /// reported complete, even if its outermost tag happens to be the root.
    pub fn is_complete(&self) -> bool {
        self.end == ChainEnd::Root
    }

    /// Render as `root > parent > tag`.
    pub fn display_path(&self) -> String {
        self.tags.join(" > ")
    }
}

/// The three independent contributions to a candidate's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub parent_bonus: u32,
    pub path_bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.base + self.parent_bonus + self.path_bonus
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub occurrence: TagOccurrence,
    pub chain: AncestorChain,
    pub breakdown: ScoreBreakdown,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// No occurrences of the tag exist for the message type.
    NoOccurrences,

    /// One candidate, or the best one leads by more than the confidence gap.
    BestMatch,

    /// Several plausible candidates; needs manual disambiguation.
    Ambiguous,
}

impl MatchConfidence {
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchConfidence::NoOccurrences => "no_occurrences",
            MatchConfidence::BestMatch => "best_match",
            MatchConfidence::Ambiguous => "ambiguous",
        }
    }
}

//! # Esptag Resolver
//!
//! Resolves an XML element name, observed inside a sample message fragment, to the
//! tag-registry occurrence(s) that represent that element within one message type.
//!
//! ## Features
//!
//! - **Path extraction** - stream-parse a fragment and capture the target's ancestor path
//! - **Chain reconstruction** - walk stored parent links to rebuild each candidate's ancestry
//! - **Correspondence scoring** - tail-anchored, depth-weighted comparison of two paths
//! - **Ranking** - order candidates and classify the result as confident or ambiguous
//!
//! ## Architecture
//!
//! ```text
//! XML fragment + tag name + message type
//!     │
//!     ├──> Path Extractor (quick-xml)
//!     │      └─ observed parent + observed path
//!     │
//!     ├──> TagRegistry::find_occurrences
//!     │      └─ candidate rows (tag name + message type)
//!     │
//!     ├──> Chain Reconstructor (TagRegistry::find_parent, ≤ 5 hops)
//!     │      └─ reconstructed chain per candidate
//!     │
//!     └──> Candidate Ranker
//!            ├─ base + parent bonus + correspondence score
//!            ├─ stable descending sort
//!            └─ confidence label (score gap)
//! ```

mod chain;
mod error;
mod extractor;
mod ranker;
mod registry;
mod resolve;
mod scorer;
mod types;

pub use chain::{reconstruct_chain, MAX_ANCESTOR_HOPS};
pub use error::{ResolveError, Result, StoreError};
pub use extractor::extract_path;
pub use ranker::{
    classify, rank_candidates, Ranking, BASE_SCORE, DEFAULT_CONFIDENCE_GAP, PARENT_MATCH_BONUS,
};
pub use registry::{InMemoryRegistry, ParentLink, TagRegistry};
pub use resolve::{resolve, ResolveRequest, Resolution, ResolverConfig};
pub use scorer::correspondence_score;
pub use types::{
    AncestorChain, ChainEnd, MatchConfidence, ObservedPath, ScoreBreakdown, ScoredCandidate,
    TagOccurrence,
};

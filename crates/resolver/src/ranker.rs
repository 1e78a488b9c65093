use crate::scorer::correspondence_score;
use crate::types::{
    AncestorChain, MatchConfidence, ObservedPath, ScoreBreakdown, ScoredCandidate, TagOccurrence,
};
use serde::Serialize;

/// Awarded to every row matching tag name and message type.
pub const BASE_SCORE: u32 = 10;

/// Awarded when the stored parent equals the observed parent.
pub const PARENT_MATCH_BONUS: u32 = 15;

/// The best candidate must lead the runner-up by more than this to count as a single match.
pub const DEFAULT_CONFIDENCE_GAP: u32 = 10;

/// Ranked candidates plus the confidence label for the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub candidates: Vec<ScoredCandidate>,
    pub confidence: MatchConfidence,
}

impl Ranking {
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.candidates.first()
    }
}

/// Score and order candidates against the observed parent and path.
///
/// Input order is the store order; candidates with equal scores keep it.
pub fn rank_candidates(
    observed: &ObservedPath,
    candidates: Vec<(TagOccurrence, AncestorChain)>,
    confidence_gap: u32,
) -> Ranking {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|(occurrence, chain)| score_candidate(observed, occurrence, chain))
        .collect();

    // `sort_by` is stable, so ties keep store order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let confidence = classify(&scored, confidence_gap);
    Ranking {
        candidates: scored,
        confidence,
    }
}

fn score_candidate(
    observed: &ObservedPath,
    occurrence: TagOccurrence,
    chain: AncestorChain,
) -> ScoredCandidate {
    let parent_matches = !observed.parent.is_empty()
        && occurrence.has_parent()
        && occurrence.parent_tag == observed.parent;

    let breakdown = ScoreBreakdown {
        base: BASE_SCORE,
        parent_bonus: if parent_matches { PARENT_MATCH_BONUS } else { 0 },
        path_bonus: correspondence_score(&observed.path, &chain.tags),
    };

    log::debug!(
        "scored '{}' (parent '{}', seq {}/{}): base={} parent={} path={} via [{}]",
        occurrence.tag,
        occurrence.parent_tag,
        occurrence.tag_seq,
        occurrence.message_tag_seq,
        breakdown.base,
        breakdown.parent_bonus,
        breakdown.path_bonus,
        chain.display_path()
    );

    ScoredCandidate {
        score: breakdown.total(),
        occurrence,
        chain,
        breakdown,
    }
}

/// Label an already-sorted candidate list.
pub fn classify(sorted: &[ScoredCandidate], confidence_gap: u32) -> MatchConfidence {
    match sorted {
        [] => MatchConfidence::NoOccurrences,
        [_] => MatchConfidence::BestMatch,
        [first, second, ..] if first.score > second.score.saturating_add(confidence_gap) => {
            MatchConfidence::BestMatch
        }
        _ => MatchConfidence::Ambiguous,
    }
}

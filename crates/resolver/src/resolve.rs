use crate::chain::reconstruct_chain;
use crate::error::{ResolveError, Result};
use crate::extractor::{extract_path, local_name};
use crate::ranker::{rank_candidates, Ranking, DEFAULT_CONFIDENCE_GAP};
use crate::registry::TagRegistry;
use crate::types::ObservedPath;
use serde::{Deserialize, Serialize};

/// Tunables for a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Score lead required for the top candidate to count as a single best match
    pub confidence_gap: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            confidence_gap: DEFAULT_CONFIDENCE_GAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Sample XML fragment containing the tag
    pub xml_fragment: String,

    /// Element name to resolve (namespace prefix optional)
    pub tag: String,

    /// Message-type identifier (e.g., "pacs.002")
    pub message_type: String,
}

/// Outcome of a successful resolution. Zero candidates is a valid outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub tag: String,
    pub message_type: String,
    pub observed: ObservedPath,
    pub ranking: Ranking,
}

/// Resolve `request.tag` to ranked registry occurrences.
///
/// Errors: empty fields are [`ResolveError::InvalidInput`]; fragment problems are
/// [`ResolveError::MalformedInput`] / [`ResolveError::NotFound`]; a failing initial registry
/// query is [`ResolveError::StoreFailure`]. Failures while walking a single candidate's chain
/// only degrade that candidate.
pub fn resolve<R: TagRegistry + ?Sized>(
    registry: &R,
    request: &ResolveRequest,
    config: ResolverConfig,
) -> Result<Resolution> {
    require("xml_fragment", &request.xml_fragment)?;
    require("tag", &request.tag)?;
    require("message_type", &request.message_type)?;

    let tag = local_name(&request.tag);
    require("tag local name", tag)?;
    let message_type = request.message_type.trim();

    let observed = extract_path(&request.xml_fragment, tag)?;

    let occurrences = registry.find_occurrences(tag, message_type)?;
    log::debug!(
        "{} registry occurrence(s) for '{tag}' in '{message_type}'",
        occurrences.len()
    );

    let candidates = occurrences
        .into_iter()
        .map(|occurrence| {
            let chain = reconstruct_chain(registry, &occurrence);
            (occurrence, chain)
        })
        .collect();

    let ranking = rank_candidates(&observed, candidates, config.confidence_gap);

    Ok(Resolution {
        tag: tag.to_string(),
        message_type: message_type.to_string(),
        observed,
        ranking,
    })
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ResolveError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

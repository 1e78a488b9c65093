use crate::registry::TagRegistry;
use crate::types::{AncestorChain, ChainEnd, TagOccurrence};
use std::collections::VecDeque;

/// Maximum number of ancestor hops walked above the immediate parent.
pub const MAX_ANCESTOR_HOPS: usize = 5;

/// Rebuild the stored ancestor chain of `candidate` by walking parent links upward.
///
/// Never fails: when a hop finds no row, hits the hop limit, or the registry errors, the
/// prefix built so far is returned and [`AncestorChain::end`] records why the walk stopped.
pub fn reconstruct_chain<R: TagRegistry + ?Sized>(
    registry: &R,
    candidate: &TagOccurrence,
) -> AncestorChain {
    let mut tags = VecDeque::from([candidate.tag.clone()]);
    if !candidate.has_parent() {
        return finish(tags, ChainEnd::Root);
    }
    tags.push_front(candidate.parent_tag.clone());

    let mut current = candidate.parent_tag.clone();
    let mut carried_seq = candidate.message_tag_seq;

    for _ in 0..MAX_ANCESTOR_HOPS {
        let link = match registry.find_parent(&current, &candidate.message_type, carried_seq) {
            Ok(Some(link)) => link,
            Ok(None) => return finish(tags, ChainEnd::ParentNotFound),
            Err(err) => {
                log::warn!(
                    "chain reconstruction for '{}' stopped at '{current}'#{carried_seq}: {err}",
                    candidate.tag
                );
                return finish(tags, ChainEnd::StoreError(err.to_string()));
            }
        };

        if link.parent_tag.is_empty() {
            return finish(tags, ChainEnd::Root);
        }

        tags.push_front(link.parent_tag.clone());
        current = link.parent_tag;
        carried_seq = link.parent_seq;
    }

    finish(tags, ChainEnd::HopLimit)
}

fn finish(tags: VecDeque<String>, end: ChainEnd) -> AncestorChain {
    AncestorChain {
        tags: tags.into(),
        end,
    }
}

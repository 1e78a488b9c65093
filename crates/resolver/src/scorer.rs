/// Tail-anchored, depth-weighted similarity between two ancestor paths.
///
/// Both paths are aligned at their innermost element. The `i`-th position from the tail
/// (1-based) contributes `(common - i + 1) * 2` when the names match, where `common` is the
/// length of the shorter path. Mismatches contribute nothing. Empty input scores 0.
pub fn correspondence_score<A, B>(observed: &[A], reconstructed: &[B]) -> u32
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let common = observed.len().min(reconstructed.len());

    observed
        .iter()
        .rev()
        .zip(reconstructed.iter().rev())
        .enumerate()
        .filter(|(_, (left, right))| left.as_ref() == right.as_ref())
        .map(|(offset, _)| ((common - offset) * 2) as u32)
        .sum()
}

use super::types::ScoredCandidate;

/// Orders candidates by descending score.
///
/// The sort is stable: equal scores keep the store's recency order. No secondary key
/// is applied.
pub fn rank_candidates(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Slices `[offset, offset + page_size)` out of the ranked window.
///
/// Pages past the end of the window come back short or empty, even when the store's
/// count says more rows match.
pub fn paginate(
    ranked: Vec<ScoredCandidate>,
    offset: usize,
    page_size: usize,
) -> Vec<ScoredCandidate> {
    ranked.into_iter().skip(offset).take(page_size).collect()
}

//! Relevance Scorer
//!
//! A weighted sum of field containment and exact-match signals plus keyword boosts.
//! Scores are integers and are not normalized by field length or term frequency, so a
//! given candidate, query and vocabulary always produce the same value.

use super::types::ScoredCandidate;
use super::vocabulary::SearchVocabulary;
use crate::catalog::types::CandidateRecord;

/// Containment and exact-match weights of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeight {
    pub contains: u32,
    pub exact: u32,
}

pub const NAME_WEIGHT: FieldWeight = FieldWeight {
    contains: 5,
    exact: 8,
};
pub const SLUG_WEIGHT: FieldWeight = FieldWeight {
    contains: 4,
    exact: 6,
};
pub const CATEGORY_WEIGHT: FieldWeight = FieldWeight {
    contains: 2,
    exact: 3,
};
pub const DESCRIPTION_WEIGHT: FieldWeight = FieldWeight {
    contains: 1,
    exact: 2,
};
pub const TAG_WEIGHT: FieldWeight = FieldWeight {
    contains: 2,
    exact: 3,
};

/// The query as the scorer sees it: the normalized phrase and its tokens.
///
/// Synonyms are absent: they widen the match filter but earn no score.
#[derive(Debug, Clone, Copy)]
pub struct QueryTerms<'a> {
    pub normalized: &'a str,
    pub tokens: &'a [String],
}

/// Scores one field value.
///
/// The phrase and every token each add `contains` when found in the field, so a
/// multi-word query collects credit once per token plus once for the whole phrase.
/// An exact phrase match adds `exact` on top.
pub fn score_text(field: Option<&str>, query: QueryTerms<'_>, weight: FieldWeight) -> u32 {
    let Some(field) = field else {
        return 0;
    };
    let text = field.to_lowercase();
    if text.is_empty() {
        return 0;
    }

    let mut score = 0;
    if text.contains(query.normalized) {
        score += weight.contains;
    }
    for token in query.tokens {
        if text.contains(token.as_str()) {
            score += weight.contains;
        }
    }
    if text == query.normalized {
        score += weight.exact;
    }
    score
}

/// Flat bonus for each boost keyword found in the product name.
pub fn keyword_boost(name: &str, vocabulary: &SearchVocabulary) -> u32 {
    let name = name.to_lowercase();
    vocabulary
        .boosts
        .iter()
        .filter(|keyword| name.contains(keyword.as_str()))
        .map(|_| vocabulary.boost_weight)
        .sum()
}

pub fn score_candidate(
    candidate: &CandidateRecord,
    query: QueryTerms<'_>,
    vocabulary: &SearchVocabulary,
) -> u32 {
    let description = candidate
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .or(candidate.short_description.as_deref());

    let tags: u32 = candidate
        .tag_names
        .iter()
        .map(|tag| score_text(Some(tag.as_str()), query, TAG_WEIGHT))
        .sum();

    score_text(Some(candidate.name.as_str()), query, NAME_WEIGHT)
        + score_text(Some(candidate.slug.as_str()), query, SLUG_WEIGHT)
        + score_text(candidate.category_name.as_deref(), query, CATEGORY_WEIGHT)
        + score_text(description, query, DESCRIPTION_WEIGHT)
        + tags
        + keyword_boost(&candidate.name, vocabulary)
}

pub fn score_all(
    candidates: Vec<CandidateRecord>,
    query: QueryTerms<'_>,
    vocabulary: &SearchVocabulary,
) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|candidate| {
            let score = score_candidate(&candidate, query, vocabulary);
            ScoredCandidate { candidate, score }
        })
        .collect()
}

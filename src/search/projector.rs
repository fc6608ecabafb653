use super::types::{ResultItem, ResultPage, ScoredCandidate, SearchRequest, Suggestion};

/// Mean of 1..5 ratings, or 0 for an unreviewed product.
pub fn average_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
    f64::from(sum) / ratings.len() as f64
}

pub fn project_item(scored: ScoredCandidate, placeholder_image: &str) -> ResultItem {
    let candidate = scored.candidate;
    let image = candidate
        .images
        .into_iter()
        .next()
        .unwrap_or_else(|| placeholder_image.to_string());

    ResultItem {
        average_rating: average_rating(&candidate.review_ratings),
        review_count: candidate.review_ratings.len(),
        id: candidate.id,
        name: candidate.name,
        slug: candidate.slug,
        image,
        price: candidate.price,
        category_name: candidate.category_name,
        short_description: candidate.short_description,
    }
}

/// Wraps a page of ranked candidates. `total` is taken verbatim from the store count.
pub fn project_page(
    page_items: Vec<ScoredCandidate>,
    total: u64,
    request: &SearchRequest,
    placeholder_image: &str,
) -> ResultPage {
    ResultPage {
        items: page_items
            .into_iter()
            .map(|scored| project_item(scored, placeholder_image))
            .collect(),
        total,
        page: request.page,
        page_size: request.page_size,
    }
}

pub fn project_suggestion(scored: ScoredCandidate) -> Suggestion {
    Suggestion {
        id: scored.candidate.id,
        name: scored.candidate.name,
        slug: scored.candidate.slug,
    }
}

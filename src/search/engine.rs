use super::error::SearchError;
use super::filter::FilterPredicate;
use super::projector::{project_page, project_suggestion};
use super::ranking::{paginate, rank_candidates};
use super::scoring::{QueryTerms, score_all};
use super::tokenizer::normalize_query;
use super::types::{ResultPage, ScoredCandidate, SearchRequest, Suggestion};
use super::vocabulary::SearchVocabulary;
use crate::catalog::store::CatalogStore;
use crate::config::SearchSettings;

use std::sync::Arc;

/// Upper bound on type-ahead suggestions per call.
pub const MAX_SUGGESTIONS: usize = 10;

/// Stateless search pipeline over a catalog store.
///
/// normalize -> expand -> build predicate -> (count ∥ fetch window) -> score -> rank ->
/// paginate -> project. Nothing is kept between calls.
pub struct SearchEngine {
    store: Arc<dyn CatalogStore>,
    vocabulary: SearchVocabulary,
    settings: SearchSettings,
}

impl SearchEngine {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        vocabulary: SearchVocabulary,
        settings: SearchSettings,
    ) -> Self {
        Self {
            store,
            vocabulary,
            settings,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<ResultPage, SearchError> {
        let Some((total, ranked)) = self.ranked_window(request).await? else {
            return Ok(ResultPage::empty(request.page, request.page_size));
        };

        let page_items = paginate(ranked, request.offset(), request.page_size);
        tracing::debug!(
            "Search page {} returned {} of {} matches",
            request.page,
            page_items.len(),
            total
        );

        Ok(project_page(
            page_items,
            total,
            request,
            &self.settings.placeholder_image,
        ))
    }

    /// Top `limit` products for a partial query, for type-ahead widgets.
    pub async fn suggest(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, SearchError> {
        let mut request = SearchRequest::new(query, &self.settings);
        request.page_size = limit.clamp(1, MAX_SUGGESTIONS);

        let Some((_, ranked)) = self.ranked_window(&request).await? else {
            return Ok(Vec::new());
        };

        Ok(paginate(ranked, 0, request.page_size)
            .into_iter()
            .map(project_suggestion)
            .collect())
    }

    /// Runs everything up to and including ranking. `None` means the query was too short
    /// and the catalog was never read.
    pub async fn ranked_window(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<(u64, Vec<ScoredCandidate>)>, SearchError> {
        let Some(normalized) = normalize_query(&request.raw_query, self.settings.min_query_chars)
        else {
            tracing::debug!("Skipping short query {:?}", request.raw_query);
            return Ok(None);
        };

        let terms = self.vocabulary.expand(&normalized);
        let predicate = FilterPredicate::build(&terms, request);
        let window = self.settings.candidate_window(request.page_size);

        tracing::debug!(
            "Query {:?} expanded to {} terms, candidate window {}",
            normalized,
            terms.terms.len(),
            window
        );

        let (total, candidates) = tokio::try_join!(
            self.store.count(&predicate),
            self.store.fetch_candidates(&predicate, window),
        )
        .inspect_err(|e| tracing::warn!("Catalog read failed for {:?}: {}", normalized, e))?;

        let query = QueryTerms {
            normalized: &terms.normalized_query,
            tokens: &terms.tokens,
        };
        let ranked = rank_candidates(score_all(candidates, query, &self.vocabulary));

        Ok(Some((total, ranked)))
    }
}

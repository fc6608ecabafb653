//! Catalog store contract consumed by the search engine.

use async_trait::async_trait;

use super::types::CandidateRecord;
use crate::search::filter::FilterPredicate;

/// Errors surfaced by a catalog backend.
///
/// Any of these is fatal for the request that triggered the read.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
    #[error("catalog backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Read-only access to the product catalog.
///
/// Both reads take the same predicate and carry no data between them, so callers may
/// issue them concurrently. Used as `Arc<dyn CatalogStore>`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Number of rows matching `predicate`. Ordering and window size do not apply.
    async fn count(&self, predicate: &FilterPredicate) -> Result<u64, StoreError>;

    /// Up to `limit` rows matching `predicate`, most recently created first.
    async fn fetch_candidates(
        &self,
        predicate: &FilterPredicate,
        limit: usize,
    ) -> Result<Vec<CandidateRecord>, StoreError>;
}

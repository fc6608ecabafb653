use crate::catalog::store::StoreError;

/// Errors returned by the search pipeline.
///
/// A too-short query is not an error; it yields an empty page.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("catalog read failed: {0}")]
    Store(#[from] StoreError),
}

impl SearchError {
    /// Store failures are transient from the caller's point of view.
    pub fn is_retryable(&self) -> bool {
        match self {
            SearchError::Store(_) => true,
        }
    }
}

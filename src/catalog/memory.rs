use super::store::{CatalogStore, StoreError};
use super::types::{CandidateRecord, CatalogProduct, RATING_RANGE};
use crate::search::filter::FilterPredicate;

use anyhow::Context;
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;

/// Product catalog held in a concurrent map, keyed by product id.
///
/// Predicates are evaluated row by row, which is fine for seed data and tests but is
/// not meant to stand in for an indexed database.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: DashMap<String, CatalogProduct>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = CatalogProduct>) -> Self {
        let catalog = Self::new();
        for product in products {
            catalog.insert(product);
        }
        catalog
    }

    /// Loads a JSON array of products and inserts every entry. Returns how many were loaded.
    pub fn load_seed_file(&self, path: &Path) -> anyhow::Result<usize> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog seed {}", path.display()))?;
        let products: Vec<CatalogProduct> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing catalog seed {}", path.display()))?;

        for product in &products {
            validate_ratings(product)
                .with_context(|| format!("invalid catalog seed {}", path.display()))?;
        }

        let loaded = products.len();
        for product in products {
            self.insert(product);
        }
        tracing::info!("Loaded {} products from {}", loaded, path.display());
        Ok(loaded)
    }

    pub fn insert(&self, product: CatalogProduct) {
        self.products.insert(product.id.clone(), product);
    }

    pub fn get(&self, id: &str) -> Option<CatalogProduct> {
        self.products.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn matching(&self, predicate: &FilterPredicate) -> Vec<CatalogProduct> {
        self.products
            .iter()
            .filter(|entry| predicate.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

/// Review ratings are whole stars from 1 to 5.
fn validate_ratings(product: &CatalogProduct) -> anyhow::Result<()> {
    if let Some(rating) = product
        .review_ratings
        .iter()
        .find(|r| !RATING_RANGE.contains(*r))
    {
        anyhow::bail!(
            "product {} has review rating {} outside {}..={}",
            product.id,
            rating,
            RATING_RANGE.start(),
            RATING_RANGE.end()
        );
    }
    Ok(())
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn count(&self, predicate: &FilterPredicate) -> Result<u64, StoreError> {
        let total = self
            .products
            .iter()
            .filter(|entry| predicate.matches(entry.value()))
            .count();
        Ok(total as u64)
    }

    async fn fetch_candidates(
        &self,
        predicate: &FilterPredicate,
        limit: usize,
    ) -> Result<Vec<CandidateRecord>, StoreError> {
        let mut rows = self.matching(predicate);
        // Map iteration order is arbitrary; ties on created_at fall back to id.
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(rows
            .iter()
            .take(limit)
            .map(CatalogProduct::to_candidate)
            .collect())
    }
}

//! Catalog Data Types
//!
//! Stored product rows, the read-only candidate projection handed to the ranking
//! engine, and the DTOs of the admin endpoints.

use serde::{Deserialize, Serialize};

/// Status value a product must carry to be visible in search.
pub const STATUS_PUBLISHED: &str = "PUBLISHED";

/// Valid values of a single review rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// A full catalog row as persisted by the store.
///
/// Only the store looks at `stock`, the visibility flags and `created_at`; everything the
/// engine needs is copied into a [`CandidateRecord`] by [`CatalogProduct::to_candidate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub review_ratings: Vec<u8>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default = "default_status")]
    pub status: String,
    /// Creation time in milliseconds since the epoch. Candidates are fetched newest first.
    #[serde(default)]
    pub created_at: u64,
}

impl CatalogProduct {
    pub fn to_candidate(&self) -> CandidateRecord {
        CandidateRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug.clone(),
            price: self.price,
            images: self.images.clone(),
            category_name: self.category.as_ref().map(|c| c.name.clone()),
            short_description: self.short_description.clone(),
            description: self.description.clone(),
            tag_names: self.tags.clone(),
            review_ratings: self.review_ratings.clone(),
        }
    }
}

/// The minimal, read-only view of a catalog row that the ranking engine works with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: f64,
    pub images: Vec<String>,
    pub category_name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub tag_names: Vec<String>,
    pub review_ratings: Vec<u8>,
}

/// Body of `POST /products`. Identity and timestamps are assigned by the server.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub slug: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: String,
}

fn default_true() -> bool {
    true
}

fn default_status() -> String {
    STATUS_PUBLISHED.to_string()
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

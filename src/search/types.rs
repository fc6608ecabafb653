use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::filter::parse_price_bound;
use crate::catalog::types::CandidateRecord;
use crate::config::SearchSettings;

/// Raw query-string parameters of `GET /search`.
///
/// Everything arrives as text so that malformed numbers degrade to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub category: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub in_stock: Option<String>,
    /// Set by clients when the query came out of an assisted suggestion flow. Only logged.
    pub assist: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<String>,
}

/// Validated, immutable input of one search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub raw_query: String,
    pub page: usize,
    pub page_size: usize,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock_only: bool,
}

impl SearchRequest {
    /// A first-page request with default page size and no structural filters.
    pub fn new(raw_query: impl Into<String>, settings: &SearchSettings) -> Self {
        Self {
            raw_query: raw_query.into(),
            page: 1,
            page_size: settings.default_page_size,
            category: None,
            min_price: None,
            max_price: None,
            in_stock_only: false,
        }
    }

    pub fn from_params(params: &SearchParams, settings: &SearchSettings) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1) as usize;
        let page_size = settings.clamp_page_size(
            params
                .page_size
                .as_deref()
                .and_then(|s| s.trim().parse::<i64>().ok()),
        );
        let category = params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Self {
            raw_query: params.q.clone(),
            page,
            page_size,
            category,
            min_price: parse_price_bound(params.min.as_deref()),
            max_price: parse_price_bound(params.max.as_deref()),
            in_stock_only: parse_flag(params.in_stock.as_deref()),
        }
    }

    /// Offset of the first item of the requested page within the ranked window.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }
}

/// Accepts the usual boolean spellings of an HTML form or query string.
pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

/// Expanded search terms derived from one normalized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSet {
    pub normalized_query: String,
    pub tokens: Vec<String>,
    pub synonyms: BTreeSet<String>,
    /// `{normalized_query} ∪ tokens ∪ synonyms`, deduplicated. Drives the match filter only.
    pub terms: BTreeSet<String>,
}

/// A candidate paired with its relevance score. Lives only inside one ranking step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: CandidateRecord,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub price: f64,
    pub category_name: Option<String>,
    pub average_rating: f64,
    pub review_count: usize,
    pub short_description: Option<String>,
}

/// One page of ranked results.
///
/// `total` is the store's full match count and may exceed what the candidate window can
/// ever page through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    #[serde(rename = "products")]
    pub items: Vec<ResultItem>,
    pub total: u64,
    pub page: usize,
    pub page_size: usize,
}

impl ResultPage {
    pub fn empty(page: usize, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            page_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub retryable: bool,
}

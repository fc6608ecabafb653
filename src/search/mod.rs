//! Search Service Module
//!
//! Turns a free-text query plus optional structural filters into a ranked, paginated
//! page of catalog products.
//!
//! ## Pipeline
//! 1. **Normalize**: trim and lowercase the query; queries under the minimum length stop here.
//! 2. **Expand**: tokenize and add synonyms from the injected vocabulary.
//! 3. **Filter**: build the declarative predicate (visibility, term match, category, price, stock).
//! 4. **Fetch**: count matches and fetch a bounded, recency-ordered candidate window, concurrently.
//! 5. **Score & rank**: weighted field matches plus keyword boosts, stable descending sort.
//! 6. **Project**: slice the requested page and map it to the response shape.
//!
//! Relevance is only exact inside the candidate window (`min(pageSize × 3, 60)` rows).
//! Deep pages can come back short while `total` still reports every match.
//!
//! ## Submodules
//! - **`engine`**: pipeline orchestration.
//! - **`tokenizer`** / **`vocabulary`**: normalization and synonym expansion.
//! - **`filter`**: predicate tree and its reference evaluation.
//! - **`scoring`** / **`ranking`** / **`projector`**: scoring, ordering and response mapping.
//! - **`analytics`**: fire-and-forget query log.
//! - **`handlers`**: Axum HTTP handlers.

pub mod analytics;
pub mod engine;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod projector;
pub mod ranking;
pub mod scoring;
pub mod tokenizer;
pub mod types;
pub mod vocabulary;

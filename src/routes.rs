use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::sync::Arc;

use crate::catalog::handlers::{handle_create_product, handle_get_product};
use crate::catalog::memory::InMemoryCatalog;
use crate::search::analytics::QueryLog;
use crate::search::engine::SearchEngine;
use crate::search::handlers::{handle_health, handle_search, handle_suggest};

pub fn build_router(
    engine: Arc<SearchEngine>,
    catalog: Arc<InMemoryCatalog>,
    query_log: QueryLog,
) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .route("/search/suggest", get(handle_suggest))
        .route("/products", post(handle_create_product))
        .route("/products/:id", get(handle_get_product))
        .route("/health", get(handle_health))
        .layer(Extension(engine))
        .layer(Extension(catalog))
        .layer(Extension(query_log))
}

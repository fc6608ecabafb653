use super::analytics::{QueryLog, QueryLogEntry, QuerySource};
use super::engine::SearchEngine;
use super::error::SearchError;
use super::types::{
    ErrorResponse, ResultPage, SearchParams, SearchRequest, SuggestParams, SuggestResponse,
    parse_flag,
};
use crate::catalog::memory::InMemoryCatalog;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::json;
use std::sync::Arc;

const DEFAULT_SUGGESTIONS: usize = 5;

type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(engine): Extension<Arc<SearchEngine>>,
    Extension(query_log): Extension<QueryLog>,
) -> Result<Json<ResultPage>, ErrorReply> {
    let request = SearchRequest::from_params(&params, engine.settings());

    let page = engine.search(&request).await.map_err(error_reply)?;

    query_log.record(QueryLogEntry {
        query: request.raw_query.clone(),
        results: page.items.len(),
        assisted: parse_flag(params.assist.as_deref()),
        source: QuerySource::Search,
    });

    Ok(Json(page))
}

pub async fn handle_suggest(
    Query(params): Query<SuggestParams>,
    Extension(engine): Extension<Arc<SearchEngine>>,
    Extension(query_log): Extension<QueryLog>,
) -> Result<Json<SuggestResponse>, ErrorReply> {
    let limit = params
        .limit
        .as_deref()
        .and_then(|l| l.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_SUGGESTIONS);

    let suggestions = engine
        .suggest(&params.q, limit)
        .await
        .map_err(error_reply)?;

    query_log.record(QueryLogEntry {
        query: params.q.clone(),
        results: suggestions.len(),
        assisted: false,
        source: QuerySource::Suggest,
    });

    Ok(Json(SuggestResponse {
        query: params.q,
        suggestions,
    }))
}

pub async fn handle_health(
    Extension(catalog): Extension<Arc<InMemoryCatalog>>,
) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "products": catalog.len(),
    }))
}

fn error_reply(err: SearchError) -> ErrorReply {
    tracing::error!("Search failed: {}", err);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorResponse {
            error: err.to_string(),
            retryable: err.is_retryable(),
        }),
    )
}

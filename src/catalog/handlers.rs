use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use std::sync::Arc;

use super::memory::InMemoryCatalog;
use super::types::{CatalogProduct, CreateProductRequest, CreateProductResponse, now_ms};

pub async fn handle_create_product(
    Extension(catalog): Extension<Arc<InMemoryCatalog>>,
    Json(req): Json<CreateProductRequest>,
) -> (StatusCode, Json<CreateProductResponse>) {
    let id = uuid::Uuid::new_v4().to_string();
    let product = CatalogProduct {
        id: id.clone(),
        name: req.name,
        slug: req.slug,
        price: req.price,
        images: req.images,
        category: req.category,
        description: req.description,
        short_description: req.short_description,
        tags: req.tags,
        review_ratings: Vec::new(),
        stock: req.stock,
        is_active: true,
        is_deleted: false,
        status: req.status,
        created_at: now_ms(),
    };

    catalog.insert(product);
    tracing::debug!("Created product {}", id);

    (StatusCode::CREATED, Json(CreateProductResponse { id }))
}

pub async fn handle_get_product(
    Extension(catalog): Extension<Arc<InMemoryCatalog>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Option<CatalogProduct>>) {
    match catalog.get(&id) {
        Some(product) => (StatusCode::OK, Json(Some(product))),
        None => {
            tracing::debug!("Product not found: {}", id);
            (StatusCode::NOT_FOUND, Json(None))
        }
    }
}

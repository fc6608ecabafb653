//! Catalog Module Tests
//!
//! Validates the in-memory catalog backend and the admin endpoints.
//!
//! ## Test Scopes
//! - **InMemoryCatalog**: Put/Get, predicate counts, recency ordering and the fetch limit.
//! - **Seed loading**: JSON seed files, including serde defaults for omitted fields.
//! - **Handlers**: product creation and lookup.

#[cfg(test)]
mod tests {
    use crate::catalog::handlers::{handle_create_product, handle_get_product};
    use crate::catalog::memory::InMemoryCatalog;
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::{
        CatalogProduct, CategoryRef, CreateProductRequest, STATUS_PUBLISHED,
    };
    use crate::config::SearchSettings;
    use crate::search::filter::FilterPredicate;
    use crate::search::types::SearchRequest;
    use crate::search::vocabulary::SearchVocabulary;

    use axum::Json;
    use axum::extract::{Extension, Path};
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn product(id: &str, name: &str, created_at: u64) -> CatalogProduct {
        CatalogProduct {
            id: id.to_string(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            price: 25.0,
            images: vec![],
            category: Some(CategoryRef {
                name: "Kitchen".to_string(),
                slug: "kitchen".to_string(),
            }),
            description: Some("Stoneware".to_string()),
            short_description: Some("Dishwasher safe".to_string()),
            tags: vec!["ceramic".to_string()],
            review_ratings: vec![5, 3],
            stock: 10,
            is_active: true,
            is_deleted: false,
            status: STATUS_PUBLISHED.to_string(),
            created_at,
        }
    }

    fn predicate_for(query: &str) -> FilterPredicate {
        let terms = SearchVocabulary::empty().expand(query);
        FilterPredicate::build(&terms, &SearchRequest::new(query, &SearchSettings::default()))
    }

    // ============================================================
    // IN-MEMORY CATALOG TESTS
    // ============================================================

    #[test]
    fn test_insert_and_get() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(product("mug-1", "Tea Mug", 1));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("mug-1").unwrap().name, "Tea Mug");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(product("mug-1", "Tea Mug", 1));
        catalog.insert(product("mug-1", "Coffee Mug", 2));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("mug-1").unwrap().name, "Coffee Mug");
    }

    #[test]
    fn test_to_candidate_copies_search_fields() {
        let candidate = product("mug-1", "Tea Mug", 1).to_candidate();

        assert_eq!(candidate.id, "mug-1");
        assert_eq!(candidate.slug, "tea-mug");
        assert_eq!(candidate.category_name.as_deref(), Some("Kitchen"));
        assert_eq!(candidate.tag_names, vec!["ceramic"]);
        assert_eq!(candidate.review_ratings, vec![5, 3]);
        assert_eq!(candidate.short_description.as_deref(), Some("Dishwasher safe"));
    }

    #[tokio::test]
    async fn test_count_applies_predicate() {
        let mut hidden = product("mug-3", "Travel Mug", 3);
        hidden.is_deleted = true;
        let catalog = InMemoryCatalog::from_products(vec![
            product("mug-1", "Tea Mug", 1),
            product("mug-2", "Coffee Mug", 2),
            product("bowl-1", "Soup Bowl", 4),
            hidden,
        ]);

        assert_eq!(catalog.count(&predicate_for("mug")).await.unwrap(), 2);
        assert_eq!(catalog.count(&predicate_for("bowl")).await.unwrap(), 1);
        assert_eq!(catalog.count(&predicate_for("teapot")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fetch_newest_first_with_id_tie_break() {
        let catalog = InMemoryCatalog::from_products(vec![
            product("b", "Mug B", 5),
            product("c", "Mug C", 9),
            product("a", "Mug A", 5),
            product("d", "Mug D", 1),
        ]);

        let rows = catalog
            .fetch_candidates(&predicate_for("mug"), 10)
            .await
            .unwrap();

        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b", "d"]);
    }

    #[tokio::test]
    async fn test_fetch_respects_limit_but_count_does_not() {
        let catalog = InMemoryCatalog::from_products(
            (0..8).map(|i| product(&format!("mug-{i}"), "Mug", i)),
        );
        let predicate = predicate_for("mug");

        let rows = catalog.fetch_candidates(&predicate, 3).await.unwrap();
        let total = catalog.count(&predicate).await.unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, "mug-7");
        assert_eq!(total, 8);
    }

    // ============================================================
    // SEED LOADING TESTS
    // ============================================================

    #[test]
    fn test_load_seed_file_applies_defaults() {
        let path = std::env::temp_dir().join(format!("catalog-seed-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"[
                {"id": "p1", "name": "Tea Mug", "slug": "tea-mug", "price": 9.5},
                {"id": "p2", "name": "Old Mug", "slug": "old-mug", "price": 4.0,
                 "status": "ARCHIVED", "isActive": false, "createdAt": 42,
                 "reviewRatings": [4, 5], "shortDescription": "Chipped"}
            ]"#,
        )
        .unwrap();

        let catalog = InMemoryCatalog::new();
        let loaded = catalog.load_seed_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, 2);
        let fresh = catalog.get("p1").unwrap();
        assert!(fresh.is_active);
        assert!(!fresh.is_deleted);
        assert_eq!(fresh.status, STATUS_PUBLISHED);
        assert_eq!(fresh.stock, 0);
        assert!(fresh.images.is_empty());

        let old = catalog.get("p2").unwrap();
        assert!(!old.is_active);
        assert_eq!(old.status, "ARCHIVED");
        assert_eq!(old.created_at, 42);
        assert_eq!(old.review_ratings, vec![4, 5]);
        assert_eq!(old.short_description.as_deref(), Some("Chipped"));
    }

    #[test]
    fn test_load_seed_file_rejects_invalid_json() {
        let path = std::env::temp_dir().join(format!("catalog-seed-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{ not a product list").unwrap();

        let catalog = InMemoryCatalog::new();
        let result = catalog.load_seed_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_seed_file_rejects_out_of_range_ratings() {
        for rating in [0, 6, 200] {
            let path =
                std::env::temp_dir().join(format!("catalog-seed-{}.json", uuid::Uuid::new_v4()));
            std::fs::write(
                &path,
                format!(
                    r#"[
                        {{"id": "ok", "name": "Tea Mug", "slug": "tea-mug", "price": 9.5,
                         "reviewRatings": [1, 5]}},
                        {{"id": "bad-mug", "name": "Bad Mug", "slug": "bad-mug", "price": 4.0,
                         "reviewRatings": [4, {rating}]}}
                    ]"#
                ),
            )
            .unwrap();

            let catalog = InMemoryCatalog::new();
            let result = catalog.load_seed_file(&path);
            std::fs::remove_file(&path).ok();

            let message = format!("{:#}", result.unwrap_err());
            assert!(message.contains("bad-mug"), "{message}");
            assert!(message.contains(&format!("rating {rating}")), "{message}");
            assert!(catalog.is_empty(), "nothing is loaded from a rejected seed");
        }
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_create_then_get_product() {
        let catalog = Arc::new(InMemoryCatalog::new());
        let req = CreateProductRequest {
            name: "Tea Mug".to_string(),
            slug: "tea-mug".to_string(),
            price: 9.5,
            images: vec!["/images/tea-mug.jpg".to_string()],
            category: None,
            description: None,
            short_description: None,
            tags: vec![],
            stock: 2,
            status: STATUS_PUBLISHED.to_string(),
        };

        let (status, Json(created)) =
            handle_create_product(Extension(catalog.clone()), Json(req)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(catalog.len(), 1);

        let (status, Json(found)) =
            handle_get_product(Extension(catalog.clone()), Path(created.id.clone())).await;
        assert_eq!(status, StatusCode::OK);
        let found = found.unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.stock, 2);
        assert!(found.created_at > 0);
        assert!(found.review_ratings.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_product_is_404() {
        let catalog = Arc::new(InMemoryCatalog::new());

        let (status, Json(found)) =
            handle_get_product(Extension(catalog), Path("nope".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(found.is_none());
    }
}

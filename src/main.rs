use catalog_search::catalog::memory::InMemoryCatalog;
use catalog_search::config::{Cli, SearchSettings};
use catalog_search::routes::build_router;
use catalog_search::search::analytics::QueryLog;
use catalog_search::search::engine::SearchEngine;
use catalog_search::search::vocabulary::SearchVocabulary;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    // 1. Catalog:
    let catalog = Arc::new(InMemoryCatalog::new());
    match &cli.catalog {
        Some(path) => {
            catalog.load_seed_file(path)?;
        }
        None => tracing::info!("No catalog seed given, starting with an empty catalog"),
    }

    // 2. Vocabulary:
    let vocabulary = match &cli.vocabulary {
        Some(path) => {
            let vocabulary = SearchVocabulary::from_json_file(path)?;
            tracing::info!(
                "Loaded vocabulary from {} ({} synonym entries, {} boosts)",
                path.display(),
                vocabulary.synonyms.len(),
                vocabulary.boosts.len()
            );
            vocabulary
        }
        None => SearchVocabulary::default(),
    };

    // 3. Engine and query log:
    let engine = Arc::new(SearchEngine::new(
        catalog.clone(),
        vocabulary,
        SearchSettings::default(),
    ));
    let query_log = QueryLog::spawn(cli.analytics_buffer);

    // 4. HTTP server:
    let app = build_router(engine, catalog, query_log);

    tracing::info!("HTTP server listening on {}", cli.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Wiring & DI. Entry point: pick a storage adapter, inject it into the use cases,
//! print the first page of categories and genres as JSON.

use anyhow::Context;
use catalogo_admin::adapters::persistence::{InMemoryCatalog, JsonFileCatalog};
use catalogo_admin::domain::SearchQuery;
use catalogo_admin::ports::{CategoryGateway, GenreGateway, UseCase};
use catalogo_admin::shared::config::{AppConfig, StoreKind};
use catalogo_admin::usecases::{DefaultListCategoriesUseCase, DefaultListGenresUseCase};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().context("invalid CATALOGO_* configuration")?;
    let (categories, genres) = gateways(&cfg).await?;

    let query = SearchQuery::new(0, cfg.default_per_page_or_default());
    let category_page = DefaultListCategoriesUseCase::new(categories)
        .execute(query.clone())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let genre_page = DefaultListGenresUseCase::new(genres)
        .execute(query)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    info!(
        categories = category_page.total,
        genres = genre_page.total,
        "catalog loaded"
    );
    println!("{}", serde_json::to_string_pretty(&category_page)?);
    println!("{}", serde_json::to_string_pretty(&genre_page)?);

    Ok(())
}

/// One store instance serves both gateways.
async fn gateways(
    cfg: &AppConfig,
) -> anyhow::Result<(Arc<dyn CategoryGateway>, Arc<dyn GenreGateway>)> {
    match cfg.store_or_default() {
        StoreKind::Memory => {
            info!("using in-memory catalog");
            let store = Arc::new(InMemoryCatalog::new());
            Ok((
                Arc::clone(&store) as Arc<dyn CategoryGateway>,
                store as Arc<dyn GenreGateway>,
            ))
        }
        StoreKind::Json => {
            let path = cfg.catalog_path();
            info!(path = %path.display(), "using JSON catalog");
            let store = Arc::new(
                JsonFileCatalog::open(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("open {}: {}", path.display(), e))?,
            );
            Ok((
                Arc::clone(&store) as Arc<dyn CategoryGateway>,
                store as Arc<dyn GenreGateway>,
            ))
        }
    }
}

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use feed_personalizer::{
    api::{create_router, AppState},
    config::Config,
    db::{MemoryProfileStore, ProfileStore, RedisProfileStore},
    services::{Catalog, PreferenceService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("feed_personalizer=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path).await?,
        None => {
            let catalog = Catalog::embedded()?;
            tracing::info!(products = catalog.len(), "Using bundled sample catalog");
            catalog
        }
    };

    let store: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => Arc::new(RedisProfileStore::connect(url, config.profile_key.clone()).await?),
        None => Arc::new(MemoryProfileStore::new()),
    };

    let preferences = PreferenceService::load(store, config.profile_defaults()).await;

    // Initialize application state
    let state = AppState::new(catalog, preferences);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

//! starcat REST API binary.

use clap::Parser;
use starcat_api::{create_router, ApiConfig, AppState, Args};
use starcat_core::{CatalogStore, StoreConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line args
    let args = Args::parse();
    let config = ApiConfig::from(&args);

    info!(
        listen = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        "Starting starcat API"
    );

    // Open the catalog store, applying pending schema migrations
    let store = CatalogStore::open(StoreConfig::new(&config.data_dir))?;

    // Create application state
    let state = AppState::new(store, config.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("API listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! starcat HTTP/REST API.
//!
//! Thin request/response glue over the catalog store: presence checks on
//! request bodies, store calls, JSON responses. All data rules live in
//! `starcat-core`.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, Args};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use starcat_core::CatalogStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Catalog store handle.
    pub store: Arc<CatalogStore>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: CatalogStore, config: ApiConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::users::routes())
        .merge(routes::profiles::routes())
        .merge(routes::people::routes())
        .merge(routes::planets::routes())
        .merge(routes::favorites::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

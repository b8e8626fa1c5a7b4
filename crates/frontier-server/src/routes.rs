//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `state` - Statistics provider and engine settings shared by all handlers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Price source
        .route("/api/v1/assets", get(handlers::list_assets))
        .route("/api/v1/statistics", post(handlers::statistics))
        // Frontier
        .route("/api/v1/frontier", post(handlers::compute_frontier))
        .route("/api/v1/frontier/assets", post(handlers::compute_asset_frontier))
        // State
        .with_state(Arc::new(state))
}

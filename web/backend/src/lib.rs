pub mod config;
pub mod error;
pub mod fares;
pub mod handlers;
pub mod models;
pub mod search;
pub mod snapshot;
pub mod state;

use axum::{Router, routing::get};
use state::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/airports", get(handlers::list_airports))
        .route("/api/airports/search", get(handlers::search_airports))
        .route("/api/fare", get(handlers::find_fare))
        .route("/api/stats", get(handlers::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, navigation};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Navigation routes
        .route("/api/v1/navigation/{location}", get(navigation::get_navigation))
        .route("/api/v1/navigation/{location}/lookup", get(navigation::lookup_by_href))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

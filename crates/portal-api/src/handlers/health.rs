use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use portal_core::{MenuLocation, NavigationOrigin};

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    /// Where the header navigation is currently being served from.
    navigation: NavigationOrigin,
    header_items: usize,
}

/// The portal stays healthy while the menu source is down; `navigation`
/// reports `fallback` in that case.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let resolved = state
        .navigation
        .resolve(MenuLocation::Header, &state.config.navigation.default_locale)
        .await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            navigation: resolved.origin,
            header_items: resolved.items.len(),
        }),
    )
}

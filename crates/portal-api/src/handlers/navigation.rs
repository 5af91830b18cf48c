// ============================================================================
// Portal API - Navigation Handlers
// File: crates/portal-api/src/handlers/navigation.rs
// ============================================================================
//! Navigation tree, breadcrumb and href lookup endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use portal_core::{build_breadcrumb, find_navigation_item_by_href, MenuLocation};
use portal_shared::utils::normalize_locale;

use crate::dto::{BreadcrumbDto, LookupQuery, NavigationNodeDto, NavigationQuery, NavigationResponse, RenderContext};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

fn resolve_locale(state: &AppState, requested: Option<&str>) -> String {
    let settings = &state.config.navigation;
    normalize_locale(requested, &settings.supported_locales, &settings.default_locale)
}

/// Navigation handler - GET /api/v1/navigation/{location}?locale=&path=
pub async fn get_navigation(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<ApiResponse<NavigationResponse>>, ApiError> {
    let location: MenuLocation = location.parse()?;
    let locale = resolve_locale(&state, query.locale.as_deref());
    let current_path = query.path.as_deref().map(str::trim).filter(|p| !p.is_empty());

    let resolved = state.navigation.resolve(location, &locale).await;

    let ctx = RenderContext {
        locale: &locale,
        default_locale: &state.config.navigation.default_locale,
        current_path,
    };
    let breadcrumb = current_path
        .map(|path| build_breadcrumb(&resolved.items, path))
        .unwrap_or_default();

    Ok(Json(ApiResponse::success(NavigationResponse {
        location,
        locale: locale.clone(),
        origin: resolved.origin,
        items: resolved.items.iter().map(|i| NavigationNodeDto::from_item(i, &ctx)).collect(),
        breadcrumb: breadcrumb.iter().map(|i| BreadcrumbDto::from_item(i, &ctx)).collect(),
    })))
}

/// Lookup handler - GET /api/v1/navigation/{location}/lookup?href=&locale=
pub async fn lookup_by_href(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<ApiResponse<NavigationNodeDto>>, ApiError> {
    let location: MenuLocation = location.parse()?;
    let locale = resolve_locale(&state, query.locale.as_deref());

    let resolved = state.navigation.resolve(location, &locale).await;
    let item = find_navigation_item_by_href(&resolved.items, &query.href)
        .ok_or_else(|| ApiError::NotFound(format!("No {} navigation item with href {}", location, query.href)))?;

    let ctx = RenderContext {
        locale: &locale,
        default_locale: &state.config.navigation.default_locale,
        current_path: None,
    };
    Ok(Json(ApiResponse::success(NavigationNodeDto::from_item(item, &ctx))))
}

//! Localized, render-ready views of the navigation tree

use serde::{Deserialize, Serialize};

use portal_core::{is_navigation_item_active, MenuLocation, NavigationItem, NavigationOrigin};

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub locale: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub href: String,
    pub locale: Option<String>,
}

/// Which locale to render and which path is being viewed.
pub struct RenderContext<'a> {
    pub locale: &'a str,
    pub default_locale: &'a str,
    pub current_path: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNodeDto {
    pub id: String,
    pub title: String,
    pub href: String,
    pub external: bool,
    /// Node or one of its descendants matches the requested path.
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<NavigationNodeDto>>,
}

impl NavigationNodeDto {
    pub fn from_item(item: &NavigationItem, ctx: &RenderContext<'_>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.label(ctx.locale, ctx.default_locale).to_string(),
            href: item.href.clone(),
            external: item.external,
            selected: ctx
                .current_path
                .is_some_and(|path| is_navigation_item_active(item, path)),
            description: item
                .description
                .as_ref()
                .map(|d| d.resolve(ctx.locale, ctx.default_locale).to_string()),
            submenu: item
                .submenu
                .as_ref()
                .map(|children| children.iter().map(|c| Self::from_item(c, ctx)).collect()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BreadcrumbDto {
    pub id: String,
    pub title: String,
    pub href: String,
}

impl BreadcrumbDto {
    pub fn from_item(item: &NavigationItem, ctx: &RenderContext<'_>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.label(ctx.locale, ctx.default_locale).to_string(),
            href: item.href.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub location: MenuLocation,
    pub locale: String,
    pub origin: NavigationOrigin,
    pub items: Vec<NavigationNodeDto>,
    pub breadcrumb: Vec<BreadcrumbDto>,
}

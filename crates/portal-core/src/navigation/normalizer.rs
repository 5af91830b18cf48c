// ============================================================================
// Portal Core - Record Normalizer
// File: crates/portal-core/src/navigation/normalizer.rs
// Description: Raw menu record → canonical navigation node (no submenu)
// ============================================================================

use once_cell::sync::Lazy;
use portal_shared::constants::{DEFAULT_LINK_SCHEME, HOME_HREF};
use regex::Regex;

use crate::domain::{MenuItemRecord, NavigationItem};

/// Absolute URL schemes plus the opaque ones CMS editors actually use.
static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z][a-z0-9+.\-]*://|mailto:|tel:)").expect("scheme pattern is valid")
});

/// Normalize a record, using its declared order or `0`.
pub fn normalize(record: &MenuItemRecord) -> NavigationItem {
    normalize_at(record, 0)
}

/// Normalize a record; `position` stands in for a missing order.
pub(crate) fn normalize_at(record: &MenuItemRecord, position: i64) -> NavigationItem {
    NavigationItem {
        id: record.id.clone(),
        title: record.title.clone(),
        href: resolve_href(record.resolved_url.as_deref(), record.url.as_deref()),
        order: record.order.unwrap_or(position),
        is_active: record.is_visible(),
        external: record.link_target().is_external(),
        description: record.description.clone().filter(|d| !d.is_empty()),
        submenu: None,
    }
}

/// Server-resolved link, else the raw link (bare hostnames get a scheme), else `/`.
pub fn resolve_href(resolved: Option<&str>, raw: Option<&str>) -> String {
    if let Some(resolved) = resolved.map(str::trim).filter(|s| !s.is_empty()) {
        return resolved.to_string();
    }

    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) if raw.starts_with('/') || raw.starts_with('#') || SCHEME_PREFIX.is_match(raw) => {
            raw.to_string()
        }
        Some(raw) => format!("{}{}", DEFAULT_LINK_SCHEME, raw),
        None => HOME_HREF.to_string(),
    }
}

// ============================================================================
// Portal Core - Active-Path Resolver
// File: crates/portal-core/src/navigation/active_path.rs
// Description: Does a navigation node correspond to the current request path?
// ============================================================================

use portal_shared::constants::HOME_HREF;

use crate::domain::NavigationItem;

/// Direct match only: the home link matches `/` exactly, any other link
/// matches itself or any path it is a raw string prefix of.
///
/// The prefix test is not segment-aware: `/cont` matches `/content-x`.
pub fn matches_path(item: &NavigationItem, current_path: &str) -> bool {
    if item.href == HOME_HREF {
        return current_path == HOME_HREF;
    }
    if item.href.is_empty() {
        return false;
    }
    current_path == item.href || current_path.starts_with(item.href.as_str())
}

/// Direct match, or any descendant matches.
pub fn is_navigation_item_active(item: &NavigationItem, current_path: &str) -> bool {
    if item.href == HOME_HREF {
        return current_path == HOME_HREF;
    }
    matches_path(item, current_path)
        || item
            .children()
            .iter()
            .any(|child| is_navigation_item_active(child, current_path))
}

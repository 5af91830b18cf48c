// ============================================================================
// Portal Core - Navigation Item
// File: crates/portal-core/src/domain/navigation_item.rs
// Description: Canonical, render-ready navigation node
// ============================================================================

use serde::{Deserialize, Serialize};

use super::LocalizedText;

/// Canonical navigation node.
///
/// `is_active` mirrors the source's active+published state and is always
/// `true` inside a built tree; whether a node matches the current page is
/// answered by [`crate::navigation::is_navigation_item_active`].
/// `submenu` is `None` rather than empty when a node has no visible children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub title: LocalizedText,
    pub href: String,
    pub order: i64,
    pub is_active: bool,
    pub external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<NavigationItem>>,
}

impl NavigationItem {
    /// Internal, active link without a submenu.
    pub fn link(id: impl Into<String>, href: impl Into<String>, order: i64, title: LocalizedText) -> Self {
        Self {
            id: id.into(),
            title,
            href: href.into(),
            order,
            is_active: true,
            external: false,
            description: None,
            submenu: None,
        }
    }

    /// Attach children; an empty list leaves the node without a submenu.
    pub fn with_submenu(mut self, submenu: Vec<NavigationItem>) -> Self {
        self.submenu = (!submenu.is_empty()).then_some(submenu);
        self
    }

    pub fn has_submenu(&self) -> bool {
        self.submenu.is_some()
    }

    pub fn children(&self) -> &[NavigationItem] {
        self.submenu.as_deref().unwrap_or(&[])
    }

    pub fn label<'a>(&'a self, locale: &str, default_locale: &str) -> &'a str {
        self.title.resolve(locale, default_locale)
    }
}

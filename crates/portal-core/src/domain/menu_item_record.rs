// ============================================================================
// Portal Core - Menu Item Record
// File: crates/portal-core/src/domain/menu_item_record.rs
// Description: Raw menu item as delivered by the CMS
// ============================================================================

use serde::{Deserialize, Serialize};

use super::lenient;
use super::LocalizedText;

/// Raw menu item. Field names vary between CMS endpoints, hence the aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,

    #[serde(default, alias = "name", alias = "label")]
    pub title: LocalizedText,

    #[serde(default, alias = "link", deserialize_with = "lenient::text")]
    pub url: Option<String>,

    #[serde(default, alias = "resolved_url", alias = "href", deserialize_with = "lenient::text")]
    pub resolved_url: Option<String>,

    #[serde(default, alias = "sortOrder", alias = "sort_order", deserialize_with = "lenient::order")]
    pub order: Option<i64>,

    #[serde(default, alias = "is_active", deserialize_with = "lenient::flag")]
    pub is_active: bool,

    #[serde(default, alias = "is_published", deserialize_with = "lenient::flag")]
    pub is_published: bool,

    #[serde(default, alias = "parent_id", alias = "parent", deserialize_with = "lenient::optional_id")]
    pub parent_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,

    #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItemRecord>,
}

impl MenuItemRecord {
    /// Active, published record with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_active: true,
            is_published: true,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: LocalizedText) -> Self {
        self.title = title;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_resolved_url(mut self, url: impl Into<String>) -> Self {
        self.resolved_url = Some(url.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItemRecord>) -> Self {
        self.children = children;
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Only records both active and published may appear in a tree.
    pub fn is_visible(&self) -> bool {
        self.is_active && self.is_published
    }

    pub fn link_target(&self) -> LinkTarget {
        LinkTarget::from_hint(self.target.as_deref())
    }
}

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    #[default]
    SameWindow,
    NewWindow,
}

impl LinkTarget {
    pub fn from_hint(hint: Option<&str>) -> Self {
        let Some(hint) = hint else {
            return LinkTarget::SameWindow;
        };
        match hint.trim().to_ascii_lowercase().as_str() {
            "_blank" | "blank" | "_new" | "new_tab" | "new-tab" | "newtab" | "new_window" | "new-window" => {
                LinkTarget::NewWindow
            }
            _ => LinkTarget::SameWindow,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::NewWindow)
    }
}

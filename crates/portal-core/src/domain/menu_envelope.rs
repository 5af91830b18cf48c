// ============================================================================
// Portal Core - Menu Envelope
// File: crates/portal-core/src/domain/menu_envelope.rs
// Description: Top-level menu carrying its own flat list of items
// ============================================================================

use serde::{Deserialize, Serialize};

use super::lenient;
use super::{LocalizedText, MenuItemRecord};

/// One menu returned for a location. Becomes a root navigation node whose
/// submenu is built from `menu_items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEnvelope {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,

    #[serde(default, alias = "title", alias = "label")]
    pub name: LocalizedText,

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

    #[serde(default, deserialize_with = "lenient::text")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,

    #[serde(default, alias = "menu_items", alias = "items", deserialize_with = "lenient::list")]
    pub menu_items: Vec<MenuItemRecord>,
}

impl MenuEnvelope {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_active: true,
            is_published: true,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: LocalizedText) -> Self {
        self.name = name;
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

    pub fn with_items(mut self, items: Vec<MenuItemRecord>) -> Self {
        self.menu_items = items;
        self
    }

    /// Decode a raw list of menus, skipping entries that are not menus at all.
    pub fn decode_all(values: Vec<serde_json::Value>) -> Vec<MenuEnvelope> {
        lenient::decode_each(values)
    }

    pub fn is_visible(&self) -> bool {
        self.is_active && self.is_published
    }

    /// The envelope's own fields as a parentless record, without its items.
    pub fn as_record(&self) -> MenuItemRecord {
        MenuItemRecord {
            id: self.id.clone(),
            title: self.name.clone(),
            url: self.url.clone(),
            resolved_url: self.resolved_url.clone(),
            order: self.order,
            is_active: self.is_active,
            is_published: self.is_published,
            parent_id: None,
            target: self.target.clone(),
            description: self.description.clone(),
            children: Vec::new(),
        }
    }
}

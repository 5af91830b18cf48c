//! # Portal Core - Domain Module
//! 
//! Raw menu records as served by the CMS and the canonical navigation tree.

pub mod localized_text;
pub mod menu_location;
pub mod menu_item_record;
pub mod menu_envelope;
pub mod navigation_item;
mod lenient;

// Re-export all entities and enums
pub use localized_text::LocalizedText;
pub use menu_location::MenuLocation;
pub use menu_item_record::{MenuItemRecord, LinkTarget};
pub use menu_envelope::MenuEnvelope;
pub use navigation_item::NavigationItem;

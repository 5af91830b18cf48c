//! # Portal Core
//! 
//! Navigation domain types, the menu resolution pipeline, and the menu source port.

pub mod domain;
pub mod navigation;
pub mod repositories;
pub mod services;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::NavigationError;
pub use navigation::{
    build_breadcrumb, build_navigation, build_tree, find_navigation_item_by_href,
    header_fallback, is_navigation_item_active, matches_path, normalize,
};
pub use repositories::MenuSource;
pub use services::{NavigationOrigin, NavigationService, ResolvedNavigation};

//! # Portal Core - Navigation Module
//! 
//! Pure pipeline: raw records → normalized nodes → ordered tree → active flags and breadcrumbs.
//! Every function here is synchronous and allocates its own output.

pub mod normalizer;
pub mod tree_builder;
pub mod active_path;
pub mod breadcrumb;
pub mod lookup;
pub mod fallback;

pub use normalizer::{normalize, resolve_href};
pub use tree_builder::{build_navigation, build_tree};
pub use active_path::{is_navigation_item_active, matches_path};
pub use breadcrumb::build_breadcrumb;
pub use lookup::find_navigation_item_by_href;
pub use fallback::header_fallback;

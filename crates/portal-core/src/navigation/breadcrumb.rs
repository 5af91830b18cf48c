// ============================================================================
// Portal Core - Breadcrumb Builder
// File: crates/portal-core/src/navigation/breadcrumb.rs
// Description: Ancestor chain from a root down to the first matching node
// ============================================================================

use super::active_path::matches_path;
use crate::domain::NavigationItem;

/// Pre-order search; the first node that directly matches `current_path`
/// ends the search. Empty when nothing matches.
pub fn build_breadcrumb(items: &[NavigationItem], current_path: &str) -> Vec<NavigationItem> {
    let mut trail = Vec::new();
    if find_trail(items, current_path, &mut trail) {
        trail.into_iter().cloned().collect()
    } else {
        Vec::new()
    }
}

fn find_trail<'a>(items: &'a [NavigationItem], current_path: &str, trail: &mut Vec<&'a NavigationItem>) -> bool {
    for item in items {
        trail.push(item);
        if matches_path(item, current_path) || find_trail(item.children(), current_path, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizedText;

    fn item(id: &str, href: &str) -> NavigationItem {
        NavigationItem::link(id, href, 0, LocalizedText::plain(id))
    }

    fn tree() -> Vec<NavigationItem> {
        vec![
            item("home", "/"),
            item("about", "#about").with_submenu(vec![
                item("history", "/about/history"),
                item("people", "#people").with_submenu(vec![item("staff", "/about/people/staff")]),
            ]),
            item("news", "/content/news"),
        ]
    }

    fn ids(items: &[NavigationItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_trail_to_nested_node() {
        let trail = build_breadcrumb(&tree(), "/about/people/staff/7");
        assert_eq!(ids(&trail), vec!["about", "people", "staff"]);
        assert!(matches_path(trail.last().unwrap(), "/about/people/staff/7"));
    }

    #[test]
    fn test_trail_to_root_node() {
        assert_eq!(ids(&build_breadcrumb(&tree(), "/")), vec!["home"]);
        assert_eq!(ids(&build_breadcrumb(&tree(), "/content/news/12")), vec!["news"]);
    }

    #[test]
    fn test_first_match_wins() {
        let items = vec![
            item("broad", "/content"),
            item("narrow", "/content/news"),
        ];
        assert_eq!(ids(&build_breadcrumb(&items, "/content/news")), vec!["broad"]);
    }

    #[test]
    fn test_parent_match_stops_before_children() {
        let items = vec![item("gallery", "/gallery").with_submenu(vec![item("photos", "/gallery/photos")])];
        assert_eq!(ids(&build_breadcrumb(&items, "/gallery/photos")), vec!["gallery"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(build_breadcrumb(&tree(), "/unknown").is_empty());
        assert!(build_breadcrumb(&[], "/").is_empty());
    }
}

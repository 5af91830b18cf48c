use crate::domain::NavigationItem;

/// First node (pre-order) whose `href` equals `href` exactly.
pub fn find_navigation_item_by_href<'a>(items: &'a [NavigationItem], href: &str) -> Option<&'a NavigationItem> {
    items.iter().find_map(|item| {
        if item.href == href {
            Some(item)
        } else {
            find_navigation_item_by_href(item.children(), href)
        }
    })
}

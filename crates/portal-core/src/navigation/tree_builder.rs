// ============================================================================
// Portal Core - Tree Builder
// File: crates/portal-core/src/navigation/tree_builder.rs
// Description: Flat parent-pointer records → ordered navigation forest
// ============================================================================

use std::collections::HashMap;

use tracing::debug;

use super::normalizer::normalize_at;
use crate::domain::{MenuEnvelope, MenuItemRecord, NavigationItem};

/// A kept record, addressed by its index in the arena.
struct Node<'a> {
    record: &'a MenuItemRecord,
    /// Declared parent after inheriting from an enclosing `children` list.
    parent_id: Option<&'a str>,
    /// Index in the flattened input, used as the order of last resort.
    position: i64,
}

impl Node<'_> {
    fn order_key(&self) -> i64 {
        self.record.order.unwrap_or(self.position)
    }
}

/// Build the ordered forest for one menu's items.
///
/// Only active and published records survive. A record whose parent is
/// missing or filtered out becomes a root. Records on a parent cycle are
/// promoted so that every kept record appears exactly once.
pub fn build_tree(records: &[MenuItemRecord]) -> Vec<NavigationItem> {
    let mut flat = Vec::with_capacity(records.len());
    flatten(records, None, &mut flat);

    // Pass 1: filter and index.
    let nodes: Vec<Node<'_>> = flat
        .into_iter()
        .enumerate()
        .filter(|(_, (record, _))| record.is_visible())
        .map(|(position, (record, parent_id))| Node {
            record,
            parent_id,
            position: position as i64,
        })
        .collect();

    if nodes.is_empty() {
        return Vec::new();
    }

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        if !node.record.id.is_empty() {
            index.entry(node.record.id.as_str()).or_insert(i);
        }
    }

    // Pass 2: child assignment.
    let mut parents: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut roots: Vec<usize> = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        match node.parent_id.and_then(|pid| index.get(pid).copied()) {
            Some(parent) => {
                parents[i] = Some(parent);
                children[parent].push(i);
            }
            None => {
                if let Some(pid) = node.parent_id {
                    debug!("Promoting orphan menu item {} (parent {} not present)", node.record.id, pid);
                }
                roots.push(i);
            }
        }
    }

    break_cycles(&nodes, &parents, &mut children, &mut roots);

    // Node index is input order; promoted roots are appended out of it.
    let by_order = |a: &usize, b: &usize| {
        nodes[*a]
            .order_key()
            .cmp(&nodes[*b].order_key())
            .then(a.cmp(b))
    };
    roots.sort_by(by_order);
    for list in children.iter_mut() {
        list.sort_by(by_order);
    }

    let mut visited = vec![false; nodes.len()];
    roots
        .iter()
        .filter_map(|&root| transform(root, &nodes, &children, &mut visited))
        .collect()
}

/// Build the forest for a location: each visible envelope is a root whose
/// submenu is the tree of its own items.
pub fn build_navigation(envelopes: &[MenuEnvelope]) -> Vec<NavigationItem> {
    let mut roots: Vec<(i64, NavigationItem)> = envelopes
        .iter()
        .enumerate()
        .filter(|(_, envelope)| envelope.is_visible())
        .map(|(position, envelope)| {
            let item = normalize_at(&envelope.as_record(), position as i64)
                .with_submenu(build_tree(&envelope.menu_items));
            (item.order, item)
        })
        .collect();

    roots.sort_by_key(|(order, _)| *order);
    roots.into_iter().map(|(_, item)| item).collect()
}

/// Depth-first flattening of pre-nested `children`.
fn flatten<'a>(
    records: &'a [MenuItemRecord],
    enclosing: Option<&'a str>,
    out: &mut Vec<(&'a MenuItemRecord, Option<&'a str>)>,
) {
    for record in records {
        let parent_id = record.parent_id.as_deref().or(enclosing);
        out.push((record, parent_id));
        if !record.children.is_empty() {
            let own_id = (!record.id.is_empty()).then_some(record.id.as_str());
            flatten(&record.children, own_id, out);
        }
    }
}

/// Every node unreachable from a root sits on a parent cycle. Cut the first
/// such node (input order) loose from its parent and make it a root.
fn break_cycles(nodes: &[Node<'_>], parents: &[Option<usize>], children: &mut [Vec<usize>], roots: &mut Vec<usize>) {
    let mut reached = vec![false; nodes.len()];
    for &root in roots.iter() {
        mark_reachable(root, children, &mut reached);
    }

    for i in 0..nodes.len() {
        if reached[i] {
            continue;
        }
        if let Some(parent) = parents[i] {
            children[parent].retain(|&c| c != i);
        }
        debug!("Breaking menu parent cycle at item {}", nodes[i].record.id);
        roots.push(i);
        mark_reachable(i, children, &mut reached);
    }
}

fn mark_reachable(start: usize, children: &[Vec<usize>], reached: &mut [bool]) {
    let mut stack = vec![start];
    while let Some(i) = stack.pop() {
        if reached[i] {
            continue;
        }
        reached[i] = true;
        stack.extend(children[i].iter().copied());
    }
}

fn transform(i: usize, nodes: &[Node<'_>], children: &[Vec<usize>], visited: &mut [bool]) -> Option<NavigationItem> {
    if visited[i] {
        return None;
    }
    visited[i] = true;

    let node = &nodes[i];
    let submenu: Vec<NavigationItem> = children[i]
        .iter()
        .filter_map(|&c| transform(c, nodes, children, visited))
        .collect();

    Some(normalize_at(node.record, node.position).with_submenu(submenu))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizedText;

    fn ids(items: &[NavigationItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn all_nodes(items: &[NavigationItem]) -> Vec<&NavigationItem> {
        let mut out = Vec::new();
        for item in items {
            out.push(item);
            out.extend(all_nodes(item.children()));
        }
        out
    }

    #[test]
    fn test_end_to_end_ordering() {
        let records = vec![
            MenuItemRecord::new("a").with_order(2),
            MenuItemRecord::new("b").with_order(1).with_parent("a"),
            MenuItemRecord::new("c").with_order(1),
        ];

        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["c", "a"]);
        assert!(tree[0].submenu.is_none());
        assert_eq!(ids(tree[1].children()), vec!["b"]);
    }

    #[test]
    fn test_child_before_parent_in_input() {
        let records = vec![
            MenuItemRecord::new("child").with_parent("parent"),
            MenuItemRecord::new("parent"),
        ];

        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["parent"]);
        assert_eq!(ids(tree[0].children()), vec!["child"]);
    }

    #[test]
    fn test_orphan_promoted_to_root() {
        let records = vec![
            MenuItemRecord::new("A"),
            MenuItemRecord::new("B").with_parent("A"),
            MenuItemRecord::new("C").with_parent("nonexistent-id"),
        ];

        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["A", "C"]);
        assert_eq!(ids(tree[0].children()), vec!["B"]);
        assert!(tree[1].submenu.is_none());
    }

    #[test]
    fn test_filter_prunes_inactive_and_unpublished() {
        let records = vec![
            MenuItemRecord::new("keep"),
            MenuItemRecord::new("hidden").inactive(),
            MenuItemRecord::new("draft").unpublished(),
            MenuItemRecord::new("under-draft").with_parent("draft"),
        ];

        let tree = build_tree(&records);
        // the child of a pruned parent is promoted, not lost
        assert_eq!(ids(&tree), vec!["keep", "under-draft"]);
        assert!(all_nodes(&tree).iter().all(|n| n.is_active));
    }

    #[test]
    fn test_missing_order_uses_input_position() {
        let records = vec![
            MenuItemRecord::new("x"),
            MenuItemRecord::new("y").with_order(0),
            MenuItemRecord::new("z"),
            MenuItemRecord::new("w").with_order(1),
        ];

        // keys: x=0, y=0, z=2, w=1; ties keep input order
        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["x", "y", "w", "z"]);
        assert_eq!(tree[0].order, 0);
        assert_eq!(tree[3].order, 2);
    }

    #[test]
    fn test_sibling_lists_sorted() {
        let records = vec![
            MenuItemRecord::new("root"),
            MenuItemRecord::new("r3").with_parent("root").with_order(3),
            MenuItemRecord::new("r1").with_parent("root").with_order(1),
            MenuItemRecord::new("r2a").with_parent("root").with_order(2),
            MenuItemRecord::new("r2b").with_parent("root").with_order(2),
        ];

        let tree = build_tree(&records);
        assert_eq!(ids(tree[0].children()), vec!["r1", "r2a", "r2b", "r3"]);
    }

    #[test]
    fn test_two_node_cycle_is_broken() {
        let records = vec![
            MenuItemRecord::new("A").with_parent("B"),
            MenuItemRecord::new("B").with_parent("A"),
            MenuItemRecord::new("root"),
        ];

        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["A", "root"]);
        assert_eq!(ids(tree[0].children()), vec!["B"]);
        assert_eq!(all_nodes(&tree).len(), 3);
    }

    #[test]
    fn test_promoted_root_keeps_input_order_on_equal_order() {
        let records = vec![
            MenuItemRecord::new("A").with_parent("B").with_order(1),
            MenuItemRecord::new("B").with_parent("A").with_order(1),
            MenuItemRecord::new("R").with_order(1),
        ];

        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["A", "R"]);
        assert_eq!(ids(tree[0].children()), vec!["B"]);
    }

    #[test]
    fn test_self_parent_is_root() {
        let records = vec![MenuItemRecord::new("loop").with_parent("loop")];
        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["loop"]);
        assert!(tree[0].submenu.is_none());
    }

    #[test]
    fn test_pre_nested_children_are_flattened() {
        let records = vec![MenuItemRecord::new("about")
            .with_title(LocalizedText::plain("About"))
            .with_children(vec![
                MenuItemRecord::new("staff").with_order(2),
                MenuItemRecord::new("history").with_order(1),
            ])];

        let tree = build_tree(&records);
        assert_eq!(ids(&tree), vec!["about"]);
        assert_eq!(ids(tree[0].children()), vec!["history", "staff"]);
    }

    #[test]
    fn test_empty_after_filtering() {
        let records = vec![MenuItemRecord::new("x").inactive()];
        assert!(build_tree(&records).is_empty());
        assert!(build_tree(&[]).is_empty());
    }

    #[test]
    fn test_build_navigation_envelopes() {
        let envelopes = vec![
            MenuEnvelope::new("main")
                .with_order(2)
                .with_items(vec![MenuItemRecord::new("news").with_resolved_url("/content/news")]),
            MenuEnvelope::new("home").with_order(1).with_resolved_url("/"),
            {
                let mut hidden = MenuEnvelope::new("hidden");
                hidden.is_published = false;
                hidden
            },
        ];

        let nav = build_navigation(&envelopes);
        assert_eq!(ids(&nav), vec!["home", "main"]);
        assert!(nav[0].submenu.is_none());
        assert_eq!(nav[1].children()[0].href, "/content/news");
    }
}

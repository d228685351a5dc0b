// ============================================================================
// Menu Core - Menu Tree Builder
// File: crates/menu-core/src/services/menu_tree.rs
// ============================================================================
//! Assembles flat parent-pointer menu records into a forest, and filters and
//! projects that forest. All functions here are pure and infallible.

use std::collections::HashMap;

use tracing::debug;

use menu_shared::constants::ROOT_PARENT_ID;

use crate::domain::{Menu, SimpleMenu};

/// Turns a flat list into a forest rooted at the empty parent id.
///
/// The input must already be ordered by sort key; that order is kept at
/// every level. Records whose parent chain never reaches a root (dangling
/// parents, cycles) are dropped.
pub fn build_tree(flat: Vec<Menu>) -> Vec<Menu> {
    if flat.is_empty() {
        return Vec::new();
    }

    let total = flat.len();
    let mut groups: HashMap<String, Vec<Menu>> = HashMap::with_capacity(total);
    for menu in flat {
        groups.entry(menu.parent_id.clone()).or_default().push(menu);
    }

    let mut roots = groups.remove(ROOT_PARENT_ID).unwrap_or_default();
    attach_children(&mut roots, &mut groups);

    if !groups.is_empty() {
        let dropped: usize = groups.values().map(Vec::len).sum();
        debug!(total, dropped, "Dropped menus unreachable from a root");
    }

    roots
}

// Each group is removed from the map as it is attached, so every record is
// visited once even when the data contains cycles.
fn attach_children(nodes: &mut [Menu], groups: &mut HashMap<String, Vec<Menu>>) {
    for node in nodes.iter_mut() {
        let mut children = groups.remove(&node.id).unwrap_or_default();
        attach_children(&mut children, groups);
        node.children = children;
    }
}

/// Keeps the top-level menus whose name, or any descendant's name, contains
/// `needle` (case-sensitive). Kept menus retain their whole subtree.
/// An empty needle returns the forest unchanged.
pub fn filter_by_name(needle: &str, forest: Vec<Menu>) -> Vec<Menu> {
    if needle.is_empty() {
        return forest;
    }
    forest
        .into_iter()
        .filter(|menu| subtree_matches(menu, needle))
        .collect()
}

fn subtree_matches(menu: &Menu, needle: &str) -> bool {
    menu.name.contains(needle) || menu.children.iter().any(|child| subtree_matches(child, needle))
}

/// Projects a forest down to id, name and children.
pub fn to_simple_forest(forest: &[Menu]) -> Vec<SimpleMenu> {
    forest.iter().map(SimpleMenu::from).collect()
}

impl From<&Menu> for SimpleMenu {
    fn from(menu: &Menu) -> Self {
        SimpleMenu {
            id: menu.id.clone(),
            name: menu.name.clone(),
            children: to_simple_forest(&menu.children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuType;
    use chrono::Utc;

    fn menu(id: &str, parent_id: &str, name: &str, sort: i32) -> Menu {
        Menu {
            id: id.to_string(),
            parent_id: parent_id.to_string(),
            name: name.to_string(),
            sort,
            menu_type: MenuType::Page,
            path: String::new(),
            component: String::new(),
            icon: String::new(),
            permission: String::new(),
            hidden: false,
            created_at: Utc::now(),
            modified_at: None,
            removed_at: None,
            children: Vec::new(),
        }
    }

    fn sys_user_role() -> Vec<Menu> {
        vec![
            menu("1", "", "Sys", 1),
            menu("2", "1", "User", 2),
            menu("3", "1", "Role", 3),
        ]
    }

    fn ids(forest: &[Menu]) -> Vec<&str> {
        forest.iter().map(|m| m.id.as_str()).collect()
    }

    // Pre-order walk yielding (parent_id, id).
    fn flatten(forest: &[Menu], out: &mut Vec<(String, String)>) {
        for m in forest {
            out.push((m.parent_id.clone(), m.id.clone()));
            flatten(&m.children, out);
        }
    }

    #[test]
    fn test_build_tree_scenario() {
        let tree = build_tree(sys_user_role());
        assert_eq!(ids(&tree), vec!["1"]);
        assert_eq!(ids(&tree[0].children), vec!["2", "3"]);
        assert!(tree[0].children.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn test_build_tree_empty() {
        assert!(build_tree(Vec::new()).is_empty());
        assert!(to_simple_forest(&[]).is_empty());
    }

    #[test]
    fn test_build_tree_preserves_per_parent_order() {
        let flat = vec![
            menu("a", "", "A", 1),
            menu("b1", "b", "B1", 1),
            menu("a2", "a", "A2", 1),
            menu("b", "", "B", 2),
            menu("a1", "a", "A1", 2),
            menu("a2x", "a2", "A2x", 3),
            menu("b2", "b", "B2", 4),
        ];
        let expected_order: Vec<(String, String)> = flat
            .iter()
            .map(|m| (m.parent_id.clone(), m.id.clone()))
            .collect();

        let tree = build_tree(flat);
        let mut walked = Vec::new();
        flatten(&tree, &mut walked);
        assert_eq!(walked.len(), expected_order.len());

        for parent in ["", "a", "b", "a2"] {
            let want: Vec<&String> = expected_order.iter().filter(|(p, _)| p == parent).map(|(_, id)| id).collect();
            let got: Vec<&String> = walked.iter().filter(|(p, _)| p == parent).map(|(_, id)| id).collect();
            assert_eq!(got, want, "sibling order under {:?}", parent);
        }
    }

    #[test]
    fn test_build_tree_drops_dangling_and_cyclic_records() {
        let flat = vec![
            menu("1", "", "Sys", 1),
            menu("orphan", "missing", "Orphan", 2),
            menu("x", "y", "X", 3),
            menu("y", "x", "Y", 4),
            menu("self", "self", "Self", 5),
        ];
        let tree = build_tree(flat);
        assert_eq!(ids(&tree), vec!["1"]);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_filter_empty_needle_is_noop() {
        let tree = build_tree(sys_user_role());
        assert_eq!(filter_by_name("", tree.clone()), tree);
    }

    #[test]
    fn test_filter_keeps_ancestor_with_whole_subtree() {
        let tree = build_tree(sys_user_role());
        let filtered = filter_by_name("Use", tree);
        assert_eq!(ids(&filtered), vec!["1"]);
        assert_eq!(ids(&filtered[0].children), vec!["2", "3"]);
    }

    #[test]
    fn test_filter_matches_deep_descendant_and_drops_other_roots() {
        let flat = vec![
            menu("1", "", "Sys", 1),
            menu("2", "1", "User", 1),
            menu("4", "2", "Audit Log", 1),
            menu("5", "", "Content", 2),
            menu("6", "5", "Article", 1),
        ];
        let filtered = filter_by_name("Audit", build_tree(flat));
        assert_eq!(ids(&filtered), vec!["1"]);
        assert!(filtered.iter().all(|m| subtree_matches(m, "Audit")));
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filtered = filter_by_name("use", build_tree(sys_user_role()));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_simple_forest_mirrors_shape() {
        fn assert_same_shape(full: &[Menu], simple: &[SimpleMenu]) {
            assert_eq!(full.len(), simple.len());
            for (f, s) in full.iter().zip(simple) {
                assert_eq!(f.id, s.id);
                assert_eq!(f.name, s.name);
                assert_same_shape(&f.children, &s.children);
            }
        }

        let tree = build_tree(sys_user_role());
        let simple = to_simple_forest(&tree);
        assert_same_shape(&tree, &simple);
        assert!(simple[0].children[0].children.is_empty());
    }
}

//! Property tests for menu tree construction.

use std::collections::HashSet;

use proptest::prelude::*;

use navmenu::{build_menu_tree, RouteNode};

use crate::strategies::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every item's level equals its depth from the root.
    #[test]
    fn property_level_equals_depth(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        let mut items = Vec::new();
        walk_with_depth(&tree, 1, &mut items);
        for (item, depth) in items {
            prop_assert_eq!(item.level, depth, "item {} at wrong level", item.key);
        }
    }

    /// PROPERTY: no item is both navigable and expandable.
    #[test]
    fn property_no_route_path_with_children(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        let mut items = Vec::new();
        walk_with_depth(&tree, 1, &mut items);
        for (item, _) in items {
            prop_assert!(
                !(item.route_path.is_some() && item.has_children()),
                "item {} has both a route path and children",
                item.key
            );
        }
    }

    /// PROPERTY: dynamic segments never become menu items.
    #[test]
    fn property_dynamic_segments_excluded(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        let mut items = Vec::new();
        walk_with_depth(&tree, 1, &mut items);
        for (item, _) in items {
            let path = item.route_path.as_deref().unwrap_or_default();
            prop_assert!(!path.contains(':'), "dynamic route {} in menu", path);
        }
    }

    /// PROPERTY: building never mutates the route table.
    #[test]
    fn property_route_table_untouched(routes in route_table()) {
        let before = routes.clone();
        let _ = build_menu_tree(&routes).unwrap();
        prop_assert_eq!(routes, before);
    }

    /// PROPERTY: every key appears at most once in a built tree.
    #[test]
    fn property_keys_unique(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        let mut items = Vec::new();
        walk_with_depth(&tree, 1, &mut items);
        let mut seen = HashSet::new();
        for (item, _) in items {
            prop_assert!(seen.insert(item.key.clone()), "key {} appears twice", item.key);
        }
    }

    /// PROPERTY: reusing a visible page name anywhere in the table is rejected.
    #[test]
    fn property_reused_name_rejected(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();
        prop_assume!(!tree.is_empty());

        let mut with_clash = routes.clone();
        with_clash.push(RouteNode::page(tree[0].key.clone(), "/clash"));

        let err = build_menu_tree(&with_clash).unwrap_err();
        prop_assert!(err.to_string().contains(&tree[0].key));
    }
}

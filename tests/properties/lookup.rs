//! Property tests for menu lookups.

use proptest::prelude::*;

use navmenu::build_menu_tree;
use navmenu::domain::services::{
    build_root_key_map, find_menu_by_key, find_menu_by_path, find_path_to_node, flatten_menus,
};

use crate::strategies::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: flatten lists every item exactly once, parents first.
    #[test]
    fn property_flatten_is_preorder(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        let mut walked = Vec::new();
        walk_with_depth(&tree, 1, &mut walked);
        let walked: Vec<&str> = walked.iter().map(|(item, _)| item.key.as_str()).collect();
        let flat: Vec<&str> = flatten_menus(&tree).into_iter().map(|item| item.key.as_str()).collect();
        prop_assert_eq!(flat, walked);
    }

    /// PROPERTY: every flattened key is found, absent keys are not.
    #[test]
    fn property_find_by_key_matches_flatten(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        for item in flatten_menus(&tree) {
            prop_assert_eq!(find_menu_by_key(&tree, &item.key), Some(item));
        }
        prop_assert!(find_menu_by_key(&tree, "absent-key").is_none());
        prop_assert!(find_menu_by_key(&tree, "").is_none());
    }

    /// PROPERTY: every navigable item is found by its route path.
    #[test]
    fn property_find_by_path_matches_route_paths(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        for item in flatten_menus(&tree) {
            if let Some(path) = item.route_path.as_deref() {
                let found = find_menu_by_path(&tree, path);
                prop_assert_eq!(found.map(|found| found.key.as_str()), Some(item.key.as_str()));
            }
        }
    }

    /// PROPERTY: the root key map agrees with the path to each node.
    #[test]
    fn property_root_key_map_matches_path_to_root(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();
        let roots = build_root_key_map(&tree);

        for item in flatten_menus(&tree) {
            let chain = find_path_to_node(&tree, &item.key).unwrap();
            prop_assert_eq!(chain.last().map(|last| last.key.as_str()), Some(item.key.as_str()));
            prop_assert_eq!(chain.len(), item.level);
            prop_assert_eq!(roots.get(&item.key), Some(&chain[0].key));
        }
    }
}

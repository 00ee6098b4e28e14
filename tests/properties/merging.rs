//! Property tests for custom item merging.

use proptest::prelude::*;
use proptest::sample::select;

use navmenu::domain::services::flatten_menus;
use navmenu::{build_menu_tree, merge_custom_menus, CustomMenuItem, RouteNode};

use crate::strategies::*;

/// A route table plus custom items whose parents are drawn from its keys
fn table_with_custom_items() -> impl Strategy<Value = (Vec<RouteNode>, Vec<CustomMenuItem>)> {
    route_table().prop_flat_map(|routes| {
        let tree = build_menu_tree(&routes).unwrap();
        let mut parents: Vec<Option<String>> = flatten_menus(&tree)
            .into_iter()
            .map(|item| Some(item.key.clone()))
            .collect();
        parents.push(None);
        parents.push(Some("missing-parent".to_string()));

        let custom = proptest::collection::vec((select(parents), order()), 0..5).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, (parent, order))| CustomMenuItem {
                        parent_key: parent,
                        order,
                        ..CustomMenuItem::link(format!("custom-{}", i), format!("Custom {}", i), "https://example.com")
                    })
                    .collect::<Vec<_>>()
            },
        );
        (Just(routes), custom)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging the same items twice gives the same result.
    #[test]
    fn property_merge_is_deterministic((routes, custom) in table_with_custom_items()) {
        let tree = build_menu_tree(&routes).unwrap();

        let first = merge_custom_menus(&tree, &custom);
        let second = merge_custom_menus(&tree, &custom);
        prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
    }

    /// PROPERTY: a successful merge keeps levels, ordering and leaf rules.
    #[test]
    fn property_merge_preserves_invariants((routes, custom) in table_with_custom_items()) {
        let tree = build_menu_tree(&routes).unwrap();

        if let Ok(merged) = merge_custom_menus(&tree, &custom) {
            let mut items = Vec::new();
            walk_with_depth(&merged, 1, &mut items);
            for (item, depth) in items {
                prop_assert_eq!(item.level, depth);
                prop_assert!(!(item.route_path.is_some() && item.has_children()));
            }
            for group in sibling_groups(&merged) {
                prop_assert_eq!(navmenu::sort_menu_items(group.to_vec()), group.to_vec());
            }
        }
    }

    /// PROPERTY: the input tree is never modified by a merge.
    #[test]
    fn property_merge_leaves_input_untouched((routes, custom) in table_with_custom_items()) {
        let tree = build_menu_tree(&routes).unwrap();
        let before = tree.clone();

        let _ = merge_custom_menus(&tree, &custom);
        prop_assert_eq!(tree, before);
    }
}

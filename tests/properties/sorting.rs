//! Property tests for sibling ordering.

use std::cmp::Ordering;

use proptest::prelude::*;

use navmenu::domain::services::{compare_menu_items, effective_order};
use navmenu::{build_menu_tree, sort_menu_items, MenuItem};

use crate::strategies::*;

fn siblings() -> impl Strategy<Value = Vec<MenuItem>> {
    proptest::collection::vec((order(), "[a-c]{1,2}"), 0..24).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (order, label))| {
                let mut item = MenuItem::new(format!("k{:02}", i), 1).with_label(label);
                item.order = order;
                item
            })
            .collect()
    })
}

fn position(key: &str) -> usize {
    key[1..].parse().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sorted output is ordered by effective order, then label.
    #[test]
    fn property_sorted_by_order_then_label(items in siblings()) {
        let sorted = sort_menu_items(items);

        for pair in sorted.windows(2) {
            prop_assert_ne!(compare_menu_items(&pair[0], &pair[1]), Ordering::Greater);
            prop_assert!(effective_order(&pair[0]) <= effective_order(&pair[1]));
        }
    }

    /// PROPERTY: exact ties keep their original relative order.
    #[test]
    fn property_sort_is_stable(items in siblings()) {
        let sorted = sort_menu_items(items);

        for pair in sorted.windows(2) {
            if compare_menu_items(&pair[0], &pair[1]) == Ordering::Equal {
                prop_assert!(position(&pair[0].key) < position(&pair[1].key));
            }
        }
    }

    /// PROPERTY: sorting a sorted group changes nothing.
    #[test]
    fn property_sort_is_idempotent(items in siblings()) {
        let once = sort_menu_items(items);
        let twice = sort_menu_items(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: every sibling group of a built tree is already sorted.
    #[test]
    fn property_built_groups_are_sorted(routes in route_table()) {
        let tree = build_menu_tree(&routes).unwrap();

        for group in sibling_groups(&tree) {
            prop_assert_eq!(sort_menu_items(group.to_vec()), group.to_vec());
        }
    }
}

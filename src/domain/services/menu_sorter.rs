//! Menu sorter
//!
//! Orders one sibling group:
//! - Ascending by effective order (unordered items sort last)
//! - Ties broken by ascending label
//! - Exact ties keep their original relative order (stable sort)

use std::cmp::Ordering;

use crate::domain::entities::MenuItem;

/// Order used for items that declare none
pub const UNORDERED: u64 = u64::MAX;

pub fn effective_order(item: &MenuItem) -> u64 {
    item.order.unwrap_or(UNORDERED)
}

pub fn compare_menu_items(a: &MenuItem, b: &MenuItem) -> Ordering {
    effective_order(a)
        .cmp(&effective_order(b))
        .then_with(|| a.label.cmp(&b.label))
}

/// Sort a sibling group. Children of the items are left untouched.
pub fn sort_menu_items(mut items: Vec<MenuItem>) -> Vec<MenuItem> {
    items.sort_by(compare_menu_items);
    items
}

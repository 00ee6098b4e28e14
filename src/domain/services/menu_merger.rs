//! Custom menu merger
//!
//! Grafts configured menu items onto a built tree:
//! - Items without a parent key are appended at root level
//! - Otherwise the first item (depth-first, first sibling first) whose key
//!   matches the parent key receives the item as a child
//! - A navigable leaf can never receive children
//! - Items whose parent is not found are dropped with a warning

use std::collections::HashSet;

use tracing::warn;

use crate::domain::entities::{CustomMenuItem, MenuItem};
use crate::domain::services::menu_lookup::flatten_menus;
use crate::domain::services::menu_sorter::sort_menu_items;
use crate::error::{NavError, NavResult};

/// Merge custom items into a copy of `menus`, in declaration order.
pub fn merge_custom_menus(menus: &[MenuItem], custom_items: &[CustomMenuItem]) -> NavResult<Vec<MenuItem>> {
    let mut result = menus.to_vec();
    let mut known_keys: HashSet<String> = flatten_menus(&result)
        .into_iter()
        .map(|item| item.key.clone())
        .collect();

    for custom in custom_items {
        custom.validate()?;
        if known_keys.contains(&custom.key) {
            return Err(NavError::DuplicateKey {
                key: custom.key.clone(),
            });
        }

        match custom.parent_key() {
            None => result.push(custom.to_menu_item(1)),
            Some(parent_key) => {
                if !attach(&mut result, custom, parent_key)? {
                    warn!(
                        key = %custom.key,
                        parent_key,
                        "custom menu parent not found, item dropped"
                    );
                    continue;
                }
            }
        }

        known_keys.insert(custom.key.clone());
    }

    Ok(sort_menu_items(result))
}

fn attach(items: &mut [MenuItem], custom: &CustomMenuItem, parent_key: &str) -> NavResult<bool> {
    for item in items.iter_mut() {
        if item.key == parent_key {
            if item.children.is_none() && item.route_path.is_some() {
                return Err(NavError::ParentIsLeaf {
                    custom_key: custom.key.clone(),
                    parent_key: item.key.clone(),
                    parent_label: item.label.clone(),
                });
            }

            let mut children = item.children.take().unwrap_or_default();
            children.push(custom.to_menu_item(item.level + 1));
            item.children = Some(sort_menu_items(children));
            return Ok(true);
        }

        if let Some(children) = item.children.as_mut() {
            if attach(children, custom, parent_key)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

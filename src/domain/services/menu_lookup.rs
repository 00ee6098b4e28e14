//! Menu lookup utilities
//!
//! Read-only queries over a built menu tree. Searches are depth-first,
//! first sibling first, and the first match wins.

use std::collections::HashMap;

use crate::domain::entities::MenuItem;

/// Index from every menu key to the key of its level-1 ancestor
pub type RootKeyMap = HashMap<String, String>;

/// Every node in pre-order (parents before their descendants)
pub fn flatten_menus(menus: &[MenuItem]) -> Vec<&MenuItem> {
    fn walk<'a>(menus: &'a [MenuItem], out: &mut Vec<&'a MenuItem>) {
        for menu in menus {
            out.push(menu);
            walk(menu.children(), out);
        }
    }

    let mut out = Vec::new();
    walk(menus, &mut out);
    out
}

/// First item whose route path equals `path`
pub fn find_menu_by_path<'a>(menus: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    flatten_menus(menus)
        .into_iter()
        .find(|menu| menu.route_path.as_deref() == Some(path))
}

/// First item whose key equals `key`; an empty key never matches
pub fn find_menu_by_key<'a>(menus: &'a [MenuItem], key: &str) -> Option<&'a MenuItem> {
    if key.is_empty() {
        return None;
    }
    flatten_menus(menus).into_iter().find(|menu| menu.key == key)
}

/// Root-level item that is, or contains, the item with `key`
pub fn find_root_menu_by_key<'a>(menus: &'a [MenuItem], key: &str) -> Option<&'a MenuItem> {
    if let Some(root) = menus.iter().find(|menu| menu.key == key) {
        return Some(root);
    }
    menus
        .iter()
        .find(|root| find_menu_by_key(root.children(), key).is_some())
}

/// Map every key to the key of its level-1 ancestor (level-1 items map to
/// themselves). Build once per tree and reuse for navigation lookups.
pub fn build_root_key_map(menus: &[MenuItem]) -> RootKeyMap {
    fn walk(menus: &[MenuItem], parent_root: Option<&str>, map: &mut RootKeyMap) {
        for menu in menus {
            let root = if menu.level == 1 {
                Some(menu.key.as_str())
            } else {
                parent_root
            };

            if let Some(root) = root {
                map.insert(menu.key.clone(), root.to_string());
            }

            walk(menu.children(), root, map);
        }
    }

    let mut map = RootKeyMap::new();
    walk(menus, None, &mut map);
    map
}

/// Chain of items from the root down to and including the item with `key`
pub fn find_path_to_node<'a>(menus: &'a [MenuItem], key: &str) -> Option<Vec<&'a MenuItem>> {
    find_chain(menus, &|menu| menu.key == key)
}

/// Keys of the groups that must be expanded to reveal the item routed at
/// `path` (ancestors only, root first)
pub fn menu_open_keys(menus: &[MenuItem], path: &str) -> Vec<String> {
    ancestor_keys(find_chain(menus, &|menu| menu.route_path.as_deref() == Some(path)))
}

/// Keys of the ancestors of the item with `key` (root first)
pub fn open_keys_for_key(menus: &[MenuItem], key: &str) -> Vec<String> {
    ancestor_keys(find_path_to_node(menus, key))
}

fn ancestor_keys(chain: Option<Vec<&MenuItem>>) -> Vec<String> {
    let Some(mut chain) = chain else {
        return Vec::new();
    };
    chain.pop();

    let mut keys: Vec<String> = Vec::with_capacity(chain.len());
    for menu in chain {
        if !keys.contains(&menu.key) {
            keys.push(menu.key.clone());
        }
    }
    keys
}

fn find_chain<'a>(
    menus: &'a [MenuItem],
    matches: &dyn Fn(&MenuItem) -> bool,
) -> Option<Vec<&'a MenuItem>> {
    for menu in menus {
        if matches(menu) {
            return Some(vec![menu]);
        }
        if let Some(mut chain) = find_chain(menu.children(), matches) {
            chain.insert(0, menu);
            return Some(chain);
        }
    }
    None
}

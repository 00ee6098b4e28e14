//! Domain Services
//!
//! Pure menu logic: building, sorting, merging and querying menu trees.
//! These services have no I/O dependencies and are easily testable.

pub mod menu_builder;
pub mod menu_lookup;
pub mod menu_merger;
pub mod menu_sorter;

pub use menu_builder::{build_menu_tree, MenuBuilder, DEFAULT_BUILTIN_ROUTE_PATHS};
pub use menu_lookup::{
    build_root_key_map, find_menu_by_key, find_menu_by_path, find_path_to_node,
    find_root_menu_by_key, flatten_menus, menu_open_keys, open_keys_for_key, RootKeyMap,
};
pub use menu_merger::merge_custom_menus;
pub use menu_sorter::{compare_menu_items, effective_order, sort_menu_items, UNORDERED};

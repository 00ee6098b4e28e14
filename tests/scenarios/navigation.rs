//! Scenario: Navigation Across Layout Modes
//!
//! Journey: The user moves between pages and switches layout modes while the
//! menu follows along.
//!
//! Success Criteria:
//! - The matching item is selected on every location change
//! - Mixed and top modes resolve the level-1 ancestor
//! - Unknown locations never clear the selection

use std::sync::Arc;

use navmenu::{LayoutMode, MemoryStorage, NavConfig};

use crate::common::*;

fn shell() -> Shell {
    Shell::start(&NavConfig::default(), Arc::new(MemoryStorage::new()), &admin_routes())
}

/// SCENARIO E: a location without a menu item keeps the selection
#[test]
fn scenario_unknown_location_keeps_selection() {
    let mut shell = shell();
    assert!(shell.visit("/system/roles"));

    assert!(!shell.visit("/system/users/42"));

    assert_eq!(shell.menu.selected_key(), Some("roles"));
    assert_eq!(shell.menu.highlighted_key(), Some("roles"));
}

/// SCENARIO: side mode shows the whole tree and expands the ancestors
#[test]
fn scenario_side_mode_navigation() {
    let mut shell = shell();

    shell.visit("/learning/rust");

    assert_eq!(shell.menu.selected_key(), Some("rust"));
    assert_eq!(shell.menu.selected_root_key(), None);
    assert_eq!(shell.menu.open_keys(), vec!["learning".to_string()]);
    assert_eq!(shell.menu.visible_menus().len(), 4);
    assert!(shell.layout.sidebar_visible());

    let crumbs: Vec<&str> = shell
        .menu
        .breadcrumbs()
        .into_iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(crumbs, vec!["Learning", "Rust"]);
}

/// SCENARIO: mixed mode splits the tree between top bar and sidebar
#[test]
fn scenario_mixed_mode_navigation() {
    let mut shell = shell();
    shell
        .menu
        .change_layout_mode(&mut shell.layout, LayoutMode::MixedSide);

    shell.visit("/system/users");
    assert_eq!(shell.menu.selected_root_key(), Some("system"));
    assert_eq!(keys(shell.menu.visible_menus()), vec!["roles", "users"]);
    assert_eq!(
        keys(shell.menu.root_menus()),
        vec!["home", "learning", "system", "about"]
    );
    assert!(shell.layout.sidebar_visible());
    assert_eq!(shell.layout.metrics(shell.menu.collapsed()).side_offset_top, 60);

    shell.visit("/home");
    assert_eq!(shell.menu.selected_root_key(), Some("home"));
    assert!(shell.menu.visible_menus().is_empty());
    assert!(!shell.layout.sidebar_visible());
    assert_eq!(shell.layout.metrics(false).content_offset_left, 0);
}

/// SCENARIO: top mode highlights the ancestor without a sidebar
#[test]
fn scenario_top_mode_navigation() {
    let mut shell = shell();
    assert!(shell.menu.change_layout_mode_key(&mut shell.layout, "top"));

    shell.visit("/learning/vue");

    assert_eq!(shell.menu.selected_key(), Some("vue"));
    assert_eq!(shell.menu.selected_root_key(), Some("learning"));
    assert!(!shell.layout.sidebar_visible());
    assert_eq!(shell.layout.metrics(false).sidebar_z_index, 99);
}

/// SCENARIO: switching layout resets only the root selection
#[test]
fn scenario_layout_switch_mid_session() {
    let mut shell = shell();
    shell
        .menu
        .change_layout_mode(&mut shell.layout, LayoutMode::MixedSide);
    shell.visit("/learning/vue");

    shell
        .menu
        .change_layout_mode(&mut shell.layout, LayoutMode::Side);

    assert_eq!(shell.menu.selected_root_key(), None);
    assert_eq!(shell.menu.selected_key(), Some("vue"));
    assert_eq!(shell.menu.visible_menus(), shell.menu.menus());

    assert!(!shell.menu.change_layout_mode_key(&mut shell.layout, "sideways"));
    assert_eq!(shell.layout.nav_mode(), LayoutMode::Side);
}

/// SCENARIO: the root path is never matched against the menu
#[test]
fn scenario_root_path_is_ignored() {
    let mut shell = shell();
    shell.visit("/about");

    assert!(!shell.visit("/"));
    assert_eq!(shell.menu.selected_key(), Some("about"));
}

/// SCENARIO: collapsing the sidebar narrows the content offset
#[test]
fn scenario_collapse_changes_widths() {
    let mut shell = shell();
    shell.visit("/home");

    assert_eq!(shell.layout.metrics(shell.menu.collapsed()).content_offset_left, 260);
    shell.menu.toggle_collapsed();
    assert_eq!(shell.layout.metrics(shell.menu.collapsed()).content_offset_left, 90);
}

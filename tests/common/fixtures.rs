//! Reusable route tables.

#![allow(dead_code)]

use navmenu::{MenuItem, MenuProps, RouteNode};

pub fn ordered(order: u64) -> MenuProps {
    MenuProps {
        order: Some(order),
        ..MenuProps::default()
    }
}

pub fn hidden() -> MenuProps {
    MenuProps {
        hide_in_menu: Some(true),
        ..MenuProps::default()
    }
}

/// Index route that turns its directory into a group
pub fn group_index(name: &str, title: &str, order: u64) -> RouteNode {
    RouteNode::page(name, "").with_title(title).with_menu_props(MenuProps {
        is_child_menu: Some(false),
        order: Some(order),
        ..MenuProps::default()
    })
}

/// A small admin application:
///
/// - home (`/home`)
/// - learning { vue, rust }
/// - system { users, roles, user-edit (`:id`, excluded) }
/// - about (collapsed directory)
/// - the builtin 404 route
pub fn admin_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::page("home", "/home")
            .with_title("Home")
            .with_menu_props(ordered(1)),
        RouteNode::directory(
            "/learning",
            vec![
                group_index("learning", "Learning", 2),
                RouteNode::page("vue", "vue")
                    .with_title("Vue")
                    .with_menu_props(ordered(1)),
                RouteNode::page("rust", "rust")
                    .with_title("Rust")
                    .with_menu_props(ordered(5)),
            ],
        ),
        RouteNode::directory(
            "/system",
            vec![
                group_index("system", "System", 3),
                RouteNode::page("users", "users").with_title("Users"),
                RouteNode::page("roles", "roles").with_title("Roles"),
                RouteNode::page("user-edit", ":id"),
            ],
        ),
        RouteNode::directory(
            "/about",
            vec![RouteNode::page("about", "")
                .with_title("About")
                .with_menu_props(ordered(4))],
        ),
        RouteNode::page("not-found", "/:404(.*)"),
    ]
}

pub fn keys(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|item| item.key.as_str()).collect()
}

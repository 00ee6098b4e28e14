//! Menu builder
//!
//! Converts a route table into a menu tree:
//! - Builtin (non-menu) routes are filtered out by path
//! - Routes hidden via `hideInMenu` and dynamic segments (`:id`) are excluded
//!   together with their subtrees
//! - Directory routes (no name) take their key and display metadata from
//!   their index child and become either a single leaf (`isChildMenu`, the
//!   default) or a group of their remaining children
//! - Every sibling group is sorted, every item tagged with its 1-based level
//! - Keys must be unique across the tree

use std::collections::HashSet;

use tracing::debug;

use crate::domain::entities::{join_route_path, MenuItem, RouteMeta, RouteNode};
use crate::domain::services::menu_lookup::flatten_menus;
use crate::domain::services::menu_sorter::sort_menu_items;
use crate::error::{NavError, NavResult};

/// Route paths that never participate in the menu
pub const DEFAULT_BUILTIN_ROUTE_PATHS: &[&str] = &["/:404(.*)"];

/// Builds menu trees from route tables
#[derive(Debug, Clone)]
pub struct MenuBuilder {
    builtin_paths: Vec<String>,
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self {
            builtin_paths: DEFAULT_BUILTIN_ROUTE_PATHS
                .iter()
                .map(|path| path.to_string())
                .collect(),
        }
    }

    pub fn with_builtin_paths(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            builtin_paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin_paths(&self) -> &[String] {
        &self.builtin_paths
    }

    fn is_builtin(&self, route: &RouteNode) -> bool {
        self.builtin_paths.iter().any(|path| *path == route.path)
    }

    /// Build a sorted menu tree from the route table.
    ///
    /// The route table is never mutated; the builder works on its own copy.
    pub fn build(&self, routes: &[RouteNode]) -> NavResult<Vec<MenuItem>> {
        let valid: Vec<RouteNode> = routes
            .iter()
            .filter(|route| !self.is_builtin(route))
            .cloned()
            .collect();

        debug!(
            total = routes.len(),
            filtered = routes.len() - valid.len(),
            "filtered builtin routes"
        );

        let menus = process_routes(valid, 1, "")?;
        ensure_unique_keys(&menus)?;
        debug!(root_items = menus.len(), "menu tree built");
        Ok(menus)
    }
}

/// Build a menu tree with the default builtin route paths
pub fn build_menu_tree(routes: &[RouteNode]) -> NavResult<Vec<MenuItem>> {
    MenuBuilder::new().build(routes)
}

fn process_routes(routes: Vec<RouteNode>, level: usize, parent_path: &str) -> NavResult<Vec<MenuItem>> {
    let mut items = Vec::with_capacity(routes.len());
    for route in routes {
        if let Some(item) = convert_route(route, level, parent_path)? {
            items.push(item);
        }
    }
    Ok(sort_menu_items(items))
}

fn convert_route(route: RouteNode, level: usize, parent_path: &str) -> NavResult<Option<MenuItem>> {
    if route.menu_props().hide_in_menu() || route.is_dynamic() {
        return Ok(None);
    }

    let full_path = resolve_full_path(&route, parent_path);

    if route.is_directory() {
        return convert_directory(route, level, full_path);
    }

    let key = route.name().unwrap_or_default().to_string();
    let item = base_menu_item(key, route.meta.as_ref(), level).with_route_path(full_path);
    Ok(Some(item.strip_empty()))
}

fn convert_directory(route: RouteNode, level: usize, full_path: String) -> NavResult<Option<MenuItem>> {
    let RouteNode { mut children, .. } = route;

    let index_position = children
        .iter()
        .position(RouteNode::is_index)
        .ok_or_else(|| NavError::MissingIndexRoute {
            path: full_path.clone(),
        })?;

    let index_props = children[index_position].menu_props();
    if index_props.hide_in_menu() {
        return Ok(None);
    }

    if index_props.is_child_menu() {
        let index = &children[index_position];
        let route_path = resolve_full_path(index, &full_path);
        let item = base_menu_item(directory_key(index, &full_path), index.meta.as_ref(), level)
            .with_route_path(route_path);
        return Ok(Some(item.strip_empty()));
    }

    // The index route only configures the group; it is not an entry of its own.
    let index = children.remove(index_position);
    let group_children = process_routes(children, level + 1, &full_path)?;

    let mut item = base_menu_item(directory_key(&index, &full_path), index.meta.as_ref(), level);
    item.children = Some(group_children);
    Ok(Some(item.strip_empty()))
}

/// Key of a directory item: its index route's name, or the directory's
/// absolute path without surrounding slashes when the index is unnamed
fn directory_key(index: &RouteNode, full_path: &str) -> String {
    index
        .name()
        .map(str::to_string)
        .unwrap_or_else(|| full_path.trim_matches('/').to_string())
}

/// Reject trees in which two items share a key
fn ensure_unique_keys(menus: &[MenuItem]) -> NavResult<()> {
    let mut seen = HashSet::new();
    for item in flatten_menus(menus) {
        if !seen.insert(item.key.as_str()) {
            return Err(NavError::DuplicateKey {
                key: item.key.clone(),
            });
        }
    }
    Ok(())
}

fn resolve_full_path(route: &RouteNode, parent_path: &str) -> String {
    match route.full_path() {
        Some(path) => path.to_string(),
        None => join_route_path(parent_path, &route.path),
    }
}

fn base_menu_item(key: String, meta: Option<&RouteMeta>, level: usize) -> MenuItem {
    let props = meta
        .and_then(|meta| meta.menu_props.clone())
        .unwrap_or_default();
    let title = meta.and_then(|meta| meta.title.clone());

    let label = props
        .custom_label
        .filter(|label| !label.is_empty())
        .or_else(|| title.filter(|title| !title.is_empty()))
        .unwrap_or_else(|| key.clone());

    MenuItem {
        key,
        label,
        route_path: None,
        children: None,
        level,
        icon: props.icon,
        order: props.order,
        target: props.target,
        query: props.query,
        href: props.href,
        disabled: props.disabled.unwrap_or(false),
    }
}

//! RouteNode entity - a record from the file-system-derived route table
//!
//! Route tables arrive fully materialized from the host router. A node
//! without a `name` is a directory; its index child (the child whose `path`
//! is empty) carries the directory's own display metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LinkTarget;

/// Marker that starts a dynamic route parameter segment (e.g. `:id`)
pub const DYNAMIC_SEGMENT_MARKER: char = ':';

/// A single route record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    /// Route name; absent (or empty) for directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path segment relative to the parent route
    #[serde(default)]
    pub path: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RouteMeta>,
}

/// Route metadata bag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    /// Page title, also the default menu label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Absolute path of the route, generated by the host router
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_props: Option<MenuProps>,
}

/// Per-route menu options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProps {
    /// Only meaningful on an index route. `true` (default) collapses the
    /// directory into a single menu item; `false` turns it into a group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_child_menu: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_in_menu: Option<bool>,

    /// Sort order; must be positive, absent sorts last
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,

    /// Only used by custom menu items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,
}

impl MenuProps {
    pub fn is_child_menu(&self) -> bool {
        self.is_child_menu.unwrap_or(true)
    }

    pub fn hide_in_menu(&self) -> bool {
        self.hide_in_menu.unwrap_or(false)
    }
}

impl RouteNode {
    /// Create a named page route
    pub fn page(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create a directory route (no name) with the given children
    pub fn directory(path: impl Into<String>, children: Vec<RouteNode>) -> Self {
        Self {
            name: None,
            path: path.into(),
            children,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: RouteMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.get_or_insert_with(RouteMeta::default).title = Some(title.into());
        self
    }

    pub fn with_menu_props(mut self, props: MenuProps) -> Self {
        self.meta.get_or_insert_with(RouteMeta::default).menu_props = Some(props);
        self
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Route name, treating an empty name as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_directory(&self) -> bool {
        self.name().is_none()
    }

    pub fn is_dynamic(&self) -> bool {
        self.path.starts_with(DYNAMIC_SEGMENT_MARKER)
    }

    pub fn is_index(&self) -> bool {
        self.path.is_empty()
    }

    /// Position of the index child, if any
    pub fn index_child_position(&self) -> Option<usize> {
        self.children.iter().position(RouteNode::is_index)
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|meta| meta.title.as_deref())
    }

    pub fn full_path(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.full_path.as_deref())
            .filter(|path| !path.is_empty())
    }

    /// Declared menu props, or defaults when none were declared
    pub fn menu_props(&self) -> MenuProps {
        self.meta
            .as_ref()
            .and_then(|meta| meta.menu_props.clone())
            .unwrap_or_default()
    }
}

/// Join a route segment onto its parent's absolute path
///
/// Absolute segments replace the parent; the empty segment resolves to the
/// parent itself.
pub fn join_route_path(parent: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        return segment.to_string();
    }
    let parent = parent.trim_end_matches('/');
    if segment.is_empty() {
        return if parent.is_empty() {
            "/".to_string()
        } else {
            parent.to_string()
        };
    }
    format!("{}/{}", parent, segment)
}

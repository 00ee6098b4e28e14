//! MenuItem entity - a node of the navigation menu tree
//!
//! A menu item is either a navigable leaf (`route_path` set, no children),
//! an expandable group (`children` set, no `route_path`), or an external
//! link (`href` set).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LinkTarget;
use crate::error::{NavError, NavResult};

/// A node of the menu tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique key across the whole tree
    pub key: String,

    /// Display text
    pub label: String,

    /// Route to navigate to; only on directly navigable items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_path: Option<String>,

    /// Sub items; only on expandable groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,

    /// 1-based depth from the root
    pub level: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<BTreeMap<String, String>>,

    /// External link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl MenuItem {
    /// Create a bare item with the given key; the label defaults to the key
    pub fn new(key: impl Into<String>, level: usize) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            route_path: None,
            children: None,
            level,
            icon: None,
            order: None,
            target: None,
            query: None,
            href: None,
            disabled: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_route_path(mut self, path: impl Into<String>) -> Self {
        self.route_path = Some(path.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_order(mut self, order: u64) -> Self {
        self.order = Some(order);
        self
    }

    /// Children as a slice (empty when this is not a group)
    pub fn children(&self) -> &[MenuItem] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Navigable leaf: has a route path and no children
    pub fn is_leaf(&self) -> bool {
        self.route_path.is_some() && self.children.is_none()
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    /// Drop empty values so the tree only carries meaningful fields
    pub(crate) fn strip_empty(mut self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|s| !s.is_empty())
        }

        self.route_path = non_empty(self.route_path);
        self.icon = non_empty(self.icon);
        self.href = non_empty(self.href);
        self.order = self.order.filter(|order| *order > 0);
        self.query = self.query.filter(|query| !query.is_empty());
        self.children = self.children.filter(|children| !children.is_empty());
        self
    }
}

/// A menu node injected by configuration rather than derived from a route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomMenuItem {
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Key of the item to attach under; absent attaches at root level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub disabled: bool,
}

impl CustomMenuItem {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Shorthand for an external link item
    pub fn link(key: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: Some(label.into()),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn under(mut self, parent_key: impl Into<String>) -> Self {
        self.parent_key = Some(parent_key.into());
        self
    }

    pub fn with_order(mut self, order: u64) -> Self {
        self.order = Some(order);
        self
    }

    /// Parent key, treating an empty key as root level
    pub fn parent_key(&self) -> Option<&str> {
        self.parent_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> NavResult<()> {
        if self.key.trim().is_empty() {
            return Err(NavError::InvalidCustomItem {
                key: self.key.clone(),
                reason: "key must not be empty".to_string(),
            });
        }
        if self.parent_key() == Some(self.key.as_str()) {
            return Err(NavError::InvalidCustomItem {
                key: self.key.clone(),
                reason: "item cannot be its own parent".to_string(),
            });
        }
        Ok(())
    }

    /// Materialize as a menu item at the given level
    pub fn to_menu_item(&self, level: usize) -> MenuItem {
        let label = self
            .label
            .clone()
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| self.key.clone());

        MenuItem {
            key: self.key.clone(),
            label,
            route_path: self.route_path.clone(),
            children: None,
            level,
            icon: self.icon.clone(),
            order: self.order,
            target: self.target,
            query: self.query.clone(),
            href: self.href.clone(),
            disabled: self.disabled,
        }
        .strip_empty()
    }
}

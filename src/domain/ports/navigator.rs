//! Navigator port
//!
//! The host router and window opener. The navigation dispatcher asks it to
//! perform route transitions and open external links.

use std::collections::BTreeMap;

use crate::domain::value_objects::LinkTarget;

/// Request to move the host router to a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTransition {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl RouteTransition {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }
}

/// Host navigation capabilities
pub trait Navigator: Send + Sync {
    /// Request an in-app route transition
    fn push(&self, transition: RouteTransition);

    /// Open an external link in the given window
    fn open_external(&self, href: &str, target: LinkTarget);
}

/// Navigator that ignores every request
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn push(&self, _transition: RouteTransition) {}

    fn open_external(&self, _href: &str, _target: LinkTarget) {}
}

//! Route store
//!
//! Tracks whether the route table has been turned into menus for this
//! session, and drives that initialization.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{MenuItem, RouteNode};
use crate::domain::ports::{write_fields, StateStorage, ROUTE_RECORD_KEY};

use super::layout_store::LayoutStore;
use super::menu_store::MenuStore;

const INIT_FLAG_FIELD: &str = "isInitAuthRoute";

pub struct RouteStore {
    initialized: bool,
    storage: Arc<dyn StateStorage>,
}

impl RouteStore {
    /// Create the store for a new session.
    ///
    /// Menus are rebuilt every session, so a flag persisted by an earlier
    /// session is cleared rather than trusted.
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        let mut store = Self {
            initialized: false,
            storage,
        };
        store.set_initialized(false);
        store
    }

    /// Whether the last initialization finished
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initialize the session's menus from `routes`.
    ///
    /// The flag is cleared while building and set once the menu store holds
    /// its tree. Calling again returns the tree built the first time.
    pub fn initialize<'m>(
        &mut self,
        menu: &'m mut MenuStore,
        layout: &LayoutStore,
        routes: &[RouteNode],
    ) -> &'m [MenuItem] {
        if menu.is_initialized() {
            return menu.menus();
        }

        self.set_initialized(false);
        menu.init_static_menus(routes, layout);
        self.set_initialized(true);
        menu.menus()
    }

    fn set_initialized(&mut self, initialized: bool) {
        self.initialized = initialized;
        write_fields(
            self.storage.as_ref(),
            ROUTE_RECORD_KEY,
            [(INIT_FLAG_FIELD, Value::from(initialized))],
        );
    }
}

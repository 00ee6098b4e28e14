//! Menu store
//!
//! Session-scoped navigation state: the built menu tree, the current
//! selection, the collapse flag, and the derived views the shell renders.
//! Derived views are refreshed by `recompute` after every mutation that
//! can affect them.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::application::layout_store::LayoutStore;
use crate::config::NavConfig;
use crate::domain::entities::{CustomMenuItem, MenuItem, RouteNode};
use crate::domain::ports::{read_record, write_fields, Navigator, StateStorage, LAYOUT_RECORD_KEY};
use crate::domain::services::{
    build_root_key_map, find_menu_by_key, find_menu_by_path, find_path_to_node,
    merge_custom_menus, open_keys_for_key, MenuBuilder, RootKeyMap,
};
use crate::domain::value_objects::LayoutMode;
use crate::error::NavResult;

use super::dispatcher::{self, Activation};

const COLLAPSED_FIELD: &str = "collapsed";
const SELECTED_KEY_FIELD: &str = "selectedKey";
const SELECTED_ROOT_KEY_FIELD: &str = "selectedRootKey";

/// Menu initialization progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitState {
    #[default]
    Uninitialized,
    Building,
    Ready,
}

pub struct MenuStore {
    builder: MenuBuilder,
    custom_items: Vec<CustomMenuItem>,
    ignored_paths: Vec<String>,

    tree: Vec<MenuItem>,
    root_keys: RootKeyMap,
    init_state: InitState,

    selected_key: Option<String>,
    selected_root_key: Option<String>,
    highlighted_key: Option<String>,
    collapsed: bool,

    // Derived
    root_menus: Vec<MenuItem>,
    visible_menus: Vec<MenuItem>,

    storage: Arc<dyn StateStorage>,
}

impl MenuStore {
    /// Create an empty store and restore persisted selection state
    pub fn new(config: &NavConfig, storage: Arc<dyn StateStorage>) -> Self {
        let mut store = Self {
            builder: MenuBuilder::with_builtin_paths(config.menu.builtin_paths.iter().cloned()),
            custom_items: config.menu.custom.clone(),
            ignored_paths: config.menu.ignore_route_paths.clone(),
            tree: Vec::new(),
            root_keys: RootKeyMap::new(),
            init_state: InitState::Uninitialized,
            selected_key: None,
            selected_root_key: None,
            highlighted_key: None,
            collapsed: false,
            root_menus: Vec::new(),
            visible_menus: Vec::new(),
            storage,
        };
        store.restore();
        store
    }

    fn restore(&mut self) {
        let record = read_record(self.storage.as_ref(), LAYOUT_RECORD_KEY);
        let text = |field: &str| {
            record
                .get(field)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        self.selected_key = text(SELECTED_KEY_FIELD);
        self.selected_root_key = text(SELECTED_ROOT_KEY_FIELD);
        self.highlighted_key = self.selected_key.clone();
        self.collapsed = record
            .get(COLLAPSED_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false);
    }

    /// Build the sorted tree for `routes` and graft the configured custom items
    pub fn build_menus(&self, routes: &[RouteNode]) -> NavResult<Vec<MenuItem>> {
        let tree = self.builder.build(routes)?;
        merge_custom_menus(&tree, &self.custom_items)
    }

    /// Build the tree once per session.
    ///
    /// Repeated calls return the existing tree. A construction error leaves
    /// the tree empty so the shell can still render.
    pub fn init_static_menus(&mut self, routes: &[RouteNode], layout: &LayoutStore) -> &[MenuItem] {
        match self.init_state {
            InitState::Ready | InitState::Building => {
                debug!(state = ?self.init_state, "menu tree already initialized");
                return &self.tree;
            }
            InitState::Uninitialized => {}
        }

        self.init_state = InitState::Building;
        let tree = match self.build_menus(routes) {
            Ok(tree) => tree,
            Err(err) => {
                error!(error = %err, "menu initialization failed, using empty menu");
                Vec::new()
            }
        };

        self.set_tree(tree, layout.nav_mode());
        self.init_state = InitState::Ready;
        &self.tree
    }

    /// Replace the tree and rebuild the root key index
    pub fn set_tree(&mut self, tree: Vec<MenuItem>, mode: LayoutMode) {
        self.root_keys = build_root_key_map(&tree);
        self.tree = tree;
        self.recompute(mode);
    }

    pub fn init_state(&self) -> InitState {
        self.init_state
    }

    pub fn is_initialized(&self) -> bool {
        self.init_state == InitState::Ready
    }

    pub fn menus(&self) -> &[MenuItem] {
        &self.tree
    }

    pub fn root_key_map(&self) -> &RootKeyMap {
        &self.root_keys
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    pub fn selected_root_key(&self) -> Option<&str> {
        self.selected_root_key.as_deref()
    }

    /// Key the menu widget shows as active
    pub fn highlighted_key(&self) -> Option<&str> {
        self.highlighted_key.as_deref()
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Top-level items without their children (mixed mode top bar)
    pub fn root_menus(&self) -> &[MenuItem] {
        &self.root_menus
    }

    /// The whole tree in side mode, otherwise the children of the selected root
    pub fn visible_menus(&self) -> &[MenuItem] {
        &self.visible_menus
    }

    /// Items from the root down to the current selection
    pub fn breadcrumbs(&self) -> Vec<&MenuItem> {
        self.selected_key
            .as_deref()
            .and_then(|key| find_path_to_node(&self.tree, key))
            .unwrap_or_default()
    }

    /// Groups to expand so the current selection is revealed
    pub fn open_keys(&self) -> Vec<String> {
        match self.selected_key.as_deref() {
            Some(key) => open_keys_for_key(&self.tree, key),
            None => Vec::new(),
        }
    }

    /// Sync the selection with a location change.
    ///
    /// Returns `false` when the location is ignored or has no menu item; the
    /// previous selection is kept in both cases.
    pub fn on_location_change(&mut self, path: &str, layout: &mut LayoutStore) -> bool {
        if self.ignored_paths.iter().any(|ignored| ignored == path) {
            return false;
        }

        let Some(current) = find_menu_by_path(&self.tree, path) else {
            warn!(path, "no menu item matches the current location");
            return false;
        };
        let key = current.key.clone();
        let level = current.level;

        self.selected_key = Some(key.clone());
        self.highlighted_key = Some(key.clone());

        let mode = layout.nav_mode();
        match mode {
            LayoutMode::Side => {
                self.selected_root_key = None;
                layout.set_sidebar_visible(true);
            }
            LayoutMode::MixedSide if level == 1 => {
                self.selected_root_key = Some(key);
                layout.set_sidebar_visible(false);
            }
            LayoutMode::MixedSide => {
                layout.set_sidebar_visible(true);
                self.resolve_root_key(&key);
            }
            LayoutMode::Top => {
                layout.set_sidebar_visible(false);
                self.resolve_root_key(&key);
            }
        }

        self.persist_selection();
        self.recompute(mode);
        true
    }

    fn resolve_root_key(&mut self, key: &str) {
        match self.root_keys.get(key) {
            Some(root) => self.selected_root_key = Some(root.clone()),
            None => warn!(key, "root menu key not found"),
        }
    }

    /// Switch layout mode; the tree and `selected_key` are left alone
    pub fn change_layout_mode(&mut self, layout: &mut LayoutStore, mode: LayoutMode) {
        layout.set_nav_mode(mode);
        self.selected_root_key = None;
        self.persist_selection();
        self.recompute(mode);
    }

    /// Switch layout mode by name. Unknown names leave all state untouched.
    pub fn change_layout_mode_key(&mut self, layout: &mut LayoutStore, mode: &str) -> bool {
        match mode.parse::<LayoutMode>() {
            Ok(mode) => {
                self.change_layout_mode(layout, mode);
                true
            }
            Err(err) => {
                warn!(error = %err, "layout mode change ignored");
                false
            }
        }
    }

    pub fn toggle_collapsed(&mut self) {
        self.set_collapsed(!self.collapsed);
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [(COLLAPSED_FIELD, Value::from(collapsed))],
        );
    }

    /// Activate the item with `key` as if it had been clicked
    pub fn activate(&mut self, navigator: &dyn Navigator, key: &str) -> Option<Activation> {
        let item = find_menu_by_key(&self.tree, key)?.clone();
        Some(dispatcher::activate(self, navigator, key, &item))
    }

    pub(crate) fn select_key(&mut self, key: &str) {
        self.selected_key = Some(key.to_string());
        self.highlighted_key = self.selected_key.clone();
        self.persist_selection();
    }

    pub(crate) fn restore_highlight(&mut self) {
        self.highlighted_key = self.selected_key.clone();
    }

    /// Refresh the derived views from the current tree and selection
    pub fn recompute(&mut self, mode: LayoutMode) {
        self.root_menus = self
            .tree
            .iter()
            .map(|menu| {
                let mut root = menu.clone();
                root.children = None;
                root
            })
            .collect();

        self.visible_menus = match mode {
            LayoutMode::Side => self.tree.clone(),
            LayoutMode::Top | LayoutMode::MixedSide => self
                .selected_root_key
                .as_deref()
                .and_then(|key| find_menu_by_key(&self.tree, key))
                .map(|root| root.children().to_vec())
                .unwrap_or_default(),
        };
    }

    fn persist_selection(&self) {
        let text = |value: &Option<String>| Value::from(value.clone().unwrap_or_default());
        write_fields(
            self.storage.as_ref(),
            LAYOUT_RECORD_KEY,
            [
                (SELECTED_KEY_FIELD, text(&self.selected_key)),
                (SELECTED_ROOT_KEY_FIELD, text(&self.selected_root_key)),
            ],
        );
    }
}

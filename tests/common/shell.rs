//! Store wiring shared by the scenarios.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use navmenu::{
    LayoutStore, LinkTarget, MenuStore, NavConfig, Navigator, RouteNode, RouteStore,
    RouteTransition, StateStorage,
};

/// Everything a host shell owns for one session
pub struct Shell {
    pub layout: LayoutStore,
    pub menu: MenuStore,
    pub routes: RouteStore,
}

impl Shell {
    /// Construct the stores and initialize menus from `routes`
    pub fn start(config: &NavConfig, storage: Arc<dyn StateStorage>, routes: &[RouteNode]) -> Self {
        let layout = LayoutStore::new(config, storage.clone());
        let mut menu = MenuStore::new(config, storage.clone());
        let mut route_store = RouteStore::new(storage);
        route_store.initialize(&mut menu, &layout, routes);
        Self {
            layout,
            menu,
            routes: route_store,
        }
    }

    pub fn visit(&mut self, path: &str) -> bool {
        self.menu.on_location_change(path, &mut self.layout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Push(RouteTransition),
    Open(String, LinkTarget),
}

#[derive(Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<Request>>,
}

impl RecordingNavigator {
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, transition: RouteTransition) {
        self.requests.lock().unwrap().push(Request::Push(transition));
    }

    fn open_external(&self, href: &str, target: LinkTarget) {
        self.requests
            .lock()
            .unwrap()
            .push(Request::Open(href.to_string(), target));
    }
}

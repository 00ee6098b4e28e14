//! Navmenu - navigation menu engine for admin shells
//!
//! Navmenu turns a file-system-derived route table into a sorted menu tree,
//! grafts configured custom items onto it, and keeps the menu selection in
//! sync with navigation across the side, top and mixed layout modes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{activate, Activation, InitState, LayoutMetrics, LayoutStore, MenuStore, RouteStore};
pub use config::{ConfigWarning, NavConfig};
pub use domain::entities::{CustomMenuItem, MenuItem, MenuProps, RouteMeta, RouteNode};
pub use domain::ports::{Navigator, RouteTransition, StateStorage};
pub use domain::services::{build_menu_tree, merge_custom_menus, sort_menu_items, MenuBuilder};
pub use domain::value_objects::{LayoutMode, LinkTarget};
pub use error::{NavError, NavResult};
pub use infrastructure::{load_routes, JsonFileStorage, MemoryStorage};

//! Application Layer
//!
//! Session-scoped stores that hold navigation state and react to host
//! events. This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain menu rules (those are in Domain)
//! - Persists state through the `StateStorage` port
//!
//! ## Stores
//!
//! - `MenuStore` - Menu tree, selection, collapse flag, derived views
//! - `LayoutStore` - Layout mode, region sizes, sidebar visibility
//! - `RouteStore` - Session menu initialization
//!
//! ## Services
//!
//! - `activate` - Resolve a menu click into a route transition or link open

pub mod dispatcher;
pub mod layout_store;
pub mod menu_store;
pub mod route_store;

pub use dispatcher::{activate, Activation};
pub use layout_store::{LayoutMetrics, LayoutStore};
pub use menu_store::{InitState, MenuStore};
pub use route_store::RouteStore;

//! Domain Entities
//!
//! - `RouteNode` - A record of the route table (input)
//! - `MenuItem` - A node of the built menu tree (output)
//! - `CustomMenuItem` - A configured node grafted onto the built tree

mod menu_item;
mod route;

pub use menu_item::{CustomMenuItem, MenuItem};
pub use route::{join_route_path, MenuProps, RouteMeta, RouteNode, DYNAMIC_SEGMENT_MARKER};

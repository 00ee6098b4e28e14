//! Domain Layer
//!
//! The core of navmenu - pure menu logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Route records and menu items
//! - `value_objects/` - Layout mode, link target
//! - `services/` - Menu builder, sorter, merger and lookups
//! - `ports/` - Interface definitions for the host router and storage

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

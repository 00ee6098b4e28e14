//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod navigator;
pub mod state_storage;

pub use navigator::{Navigator, NoopNavigator, RouteTransition};
pub use state_storage::{
    read_record, write_fields, StateRecord, StateStorage, LAYOUT_RECORD_KEY, ROUTE_RECORD_KEY,
};

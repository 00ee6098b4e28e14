//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `storage/` - State storage implementations (JSON files, memory)
//! - `routes` - Route table loading

pub mod routes;
pub mod storage;

pub use routes::{load_routes, parse_routes};
pub use storage::{default_state_dir, JsonFileStorage, MemoryStorage};

//! State storage implementations

mod json_file;
mod memory;

pub use json_file::{default_state_dir, JsonFileStorage};
pub use memory::MemoryStorage;

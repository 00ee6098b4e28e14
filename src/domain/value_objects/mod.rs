//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod layout_mode;
mod link_target;

pub use layout_mode::LayoutMode;
pub use link_target::LinkTarget;

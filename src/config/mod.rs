//! Configuration module for navmenu
//!
//! Configuration hierarchy:
//! 1. Environment variables (NAVMENU_*) (highest priority)
//! 2. Project config (navmenu.toml)
//! 3. User config (~/.config/navmenu/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    FooterConfig, HeaderConfig, LayoutConfig, MenuConfig, NavConfig, SidebarConfig, TabsConfig,
};

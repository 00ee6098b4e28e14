//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::CustomMenuItem;
use crate::domain::services::DEFAULT_BUILTIN_ROUTE_PATHS;
use crate::domain::value_objects::LayoutMode;
use crate::error::NavResult;

use super::loader::{self, ConfigWarning};

/// Layout container configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LayoutConfig {
    #[serde(default)]
    pub nav_mode: LayoutMode,
}

/// Header bar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    #[serde(default = "default_header_height")]
    pub height: u32,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_true")]
    pub show_breadcrumb: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            height: default_header_height(),
            title: default_title(),
            show_breadcrumb: true,
        }
    }
}

fn default_header_height() -> u32 {
    60
}

fn default_title() -> String {
    "ZMod-Admin".to_string()
}

/// Sidebar configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    #[serde(default = "default_sidebar_width")]
    pub width: u32,

    #[serde(default = "default_sidebar_collapsed_width")]
    pub collapsed_width: u32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: default_sidebar_width(),
            collapsed_width: default_sidebar_collapsed_width(),
        }
    }
}

fn default_sidebar_width() -> u32 {
    260
}

fn default_sidebar_collapsed_width() -> u32 {
    90
}

/// Tab bar configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsConfig {
    #[serde(default = "default_true")]
    pub show: bool,

    #[serde(default = "default_tabs_height")]
    pub height: u32,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            show: true,
            height: default_tabs_height(),
        }
    }
}

fn default_tabs_height() -> u32 {
    44
}

/// Footer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(default = "default_footer_height")]
    pub height: u32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            height: default_footer_height(),
        }
    }
}

fn default_footer_height() -> u32 {
    48
}

/// Menu construction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Route paths that never become menu items
    #[serde(default = "default_builtin_paths")]
    pub builtin_paths: Vec<String>,

    /// Locations that never change the menu selection
    #[serde(default = "default_ignore_route_paths")]
    pub ignore_route_paths: Vec<String>,

    /// Items grafted onto the built tree, in declaration order
    #[serde(default)]
    pub custom: Vec<CustomMenuItem>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            builtin_paths: default_builtin_paths(),
            ignore_route_paths: default_ignore_route_paths(),
            custom: Vec::new(),
        }
    }
}

fn default_builtin_paths() -> Vec<String> {
    DEFAULT_BUILTIN_ROUTE_PATHS
        .iter()
        .map(|path| path.to_string())
        .collect()
}

fn default_ignore_route_paths() -> Vec<String> {
    vec!["/".to_string()]
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub sidebar: SidebarConfig,

    #[serde(default)]
    pub tabs: TabsConfig,

    #[serde(default)]
    pub footer: FooterConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (NAVMENU_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

//! Layout Mode Value Object
//!
//! Defines how the navigation shell arranges its menus.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Navigation layout mode
///
/// - `Side`: the whole menu tree renders in the sidebar (default)
/// - `Top`: the menu tree renders as a horizontal bar, no sidebar
/// - `MixedSide`: top-level items render horizontally, their descendants in
///   the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LayoutMode {
    #[default]
    #[serde(rename = "side")]
    Side,
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "mixedSide")]
    MixedSide,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Side => "side",
            LayoutMode::Top => "top",
            LayoutMode::MixedSide => "mixedSide",
        }
    }

    /// Whether this mode renders a sidebar at all
    pub fn has_sidebar(&self) -> bool {
        !matches!(self, LayoutMode::Top)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "side" => Ok(LayoutMode::Side),
            "top" => Ok(LayoutMode::Top),
            "mixedSide" | "mixed-side" | "mixed_side" => Ok(LayoutMode::MixedSide),
            other => Err(NavError::UnknownLayoutMode {
                value: other.to_string(),
            }),
        }
    }
}

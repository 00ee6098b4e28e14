//! Link target value object (which window a menu link opens in)

use serde::{Deserialize, Serialize};

/// Window a menu link opens in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LinkTarget {
    /// Replace the current window
    #[serde(rename = "_self", alias = "self")]
    Current,
    /// Open a new window or tab
    #[default]
    #[serde(rename = "_blank", alias = "blank")]
    Blank,
}

//! Error types for navmenu
//!
//! Uses `thiserror` for library errors. Structural errors are fatal to a
//! build or merge step; callers at the store boundary recover from them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navmenu operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navmenu operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Directory route without an index child (a child whose path is empty)
    #[error("menu build failed: directory '{path}' has no index route")]
    MissingIndexRoute { path: String },

    /// Custom menu item targets a parent that is a navigable leaf
    #[error(
        "menu merge failed: '{parent_label}' ({parent_key}) is a menu item and cannot hold submenu '{custom_key}'"
    )]
    ParentIsLeaf {
        custom_key: String,
        parent_key: String,
        parent_label: String,
    },

    /// Two menu items share a key (from the route table or custom items)
    #[error("menu key '{key}' is used by more than one menu item")]
    DuplicateKey { key: String },

    /// Custom menu item declaration is malformed
    #[error("invalid custom menu item '{key}': {reason}")]
    InvalidCustomItem { key: String, reason: String },

    /// Layout mode string not recognized
    #[error("unknown layout mode '{value}' (expected side, top or mixedSide)")]
    UnknownLayoutMode { value: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Route table could not be parsed
    #[error("invalid route table in {file}: {message}")]
    InvalidRouteTable { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

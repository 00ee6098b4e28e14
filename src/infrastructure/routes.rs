//! Route table loading
//!
//! Reads a materialized route table (as exported by the host router) from
//! JSON.

use std::fs;
use std::path::Path;

use crate::domain::entities::RouteNode;
use crate::error::{NavError, NavResult};

/// Load a route table from a JSON file
pub fn load_routes(path: &Path) -> NavResult<Vec<RouteNode>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| NavError::InvalidRouteTable {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a route table from a JSON string
pub fn parse_routes(json: &str) -> NavResult<Vec<RouteNode>> {
    Ok(serde_json::from_str(json)?)
}

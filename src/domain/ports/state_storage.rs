//! State storage port
//!
//! Persists flat key-value records between sessions. Stores write through on
//! every persistent mutation and read back once at construction.

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::warn;

/// A flat key-value record
pub type StateRecord = Map<String, Value>;

/// Record holding layout and collapse-adjacent display settings
pub const LAYOUT_RECORD_KEY: &str = "layout-store";

/// Record holding the route initialization flag
pub const ROUTE_RECORD_KEY: &str = "route-store";

pub trait StateStorage: Send + Sync {
    /// Load a record; `Ok(None)` when it was never saved
    fn load(&self, key: &str) -> Result<Option<StateRecord>>;

    /// Replace a record
    fn save(&self, key: &str, record: &StateRecord) -> Result<()>;
}

/// Read a record, treating failures as an empty record
pub fn read_record(storage: &dyn StateStorage, key: &str) -> StateRecord {
    match storage.load(key) {
        Ok(record) => record.unwrap_or_default(),
        Err(error) => {
            warn!(record = key, error = %error, "failed to load persisted state");
            StateRecord::new()
        }
    }
}

/// Merge `fields` into a record and save it. Failures are logged, never
/// propagated, so a broken storage cannot break navigation.
pub fn write_fields(storage: &dyn StateStorage, key: &str, fields: impl IntoIterator<Item = (&'static str, Value)>) {
    let mut record = read_record(storage, key);
    for (field, value) in fields {
        record.insert(field.to_string(), value);
    }
    if let Err(error) = storage.save(key, &record) {
        warn!(record = key, error = %error, "failed to persist state");
    }
}

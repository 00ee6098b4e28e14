//! In-memory state storage, for tests and hosts without a disk

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::domain::ports::{StateRecord, StateStorage};

#[derive(Default)]
pub struct MemoryStorage {
    records: Mutex<HashMap<String, StateRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a record
    pub fn with_record(self, key: impl Into<String>, record: StateRecord) -> Self {
        if let Ok(mut records) = self.records.lock() {
            records.insert(key.into(), record);
        }
        self
    }

    /// Snapshot of a stored record
    pub fn record(&self, key: &str) -> Option<StateRecord> {
        self.records.lock().ok()?.get(key).cloned()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<StateRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("state storage lock poisoned"))?;
        Ok(records.get(key).cloned())
    }

    fn save(&self, key: &str, record: &StateRecord) -> Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("state storage lock poisoned"))?;
        records.insert(key.to_string(), record.clone());
        Ok(())
    }
}

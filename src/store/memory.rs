//! In-memory [`RecordStore`] implementation for tests and embedded use.
//!
//! A `HashMap` keyed by content hash behind `std::sync::RwLock`. Value
//! lookups scan and compare lowercased values, matching the folding the
//! SQLite store performs in SQL.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::AnalyzedRecord;

use super::{PutOutcome, RecordStore};

pub struct MemoryStore {
    records: RwLock<HashMap<String, AnalyzedRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, record: &AnalyzedRecord) -> Result<PutOutcome> {
        let mut records = self.records.write().unwrap();
        if records.contains_key(&record.id) {
            return Ok(PutOutcome::Conflict);
        }
        records.insert(record.id.clone(), record.clone());
        Ok(PutOutcome::Inserted)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<AnalyzedRecord>> {
        let records = self.records.read().unwrap();
        Ok(records.get(id).cloned())
    }

    async fn get_by_value(&self, value: &str) -> Result<Option<AnalyzedRecord>> {
        let folded = value.to_lowercase();
        let records = self.records.read().unwrap();
        Ok(records
            .values()
            .find(|r| r.value.to_lowercase() == folded)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<AnalyzedRecord>> {
        let records = self.records.read().unwrap();
        Ok(records.values().cloned().collect())
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool> {
        let folded = value.to_lowercase();
        let mut records = self.records.write().unwrap();
        let id = records
            .values()
            .find(|r| r.value.to_lowercase() == folded)
            .map(|r| r.id.clone());
        match id {
            Some(id) => {
                records.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

//! Storage abstraction for analyzed string records.
//!
//! The [`RecordStore`] trait defines every operation the query engine
//! needs, enabling pluggable backends (SQLite, in-memory). Implementations
//! must be `Send + Sync` to work with async runtimes.
//!
//! The store owns the at-most-one-record-per-content-hash invariant:
//! [`RecordStore::put`] reports a conflict instead of overwriting, so a
//! create race between identical texts is resolved by the backend's
//! uniqueness constraint, never by engine-side read-then-write.

pub mod memory;
pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::AnalyzedRecord;

/// Outcome of a [`RecordStore::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    /// A record with the same id already exists and was left untouched.
    Conflict,
}

/// Abstract storage backend for analyzed records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record. Returns [`PutOutcome::Conflict`] when the id is
    /// already present; existing records are never overwritten.
    async fn put(&self, record: &AnalyzedRecord) -> Result<PutOutcome>;

    /// Retrieve a record by content hash.
    async fn get_by_id(&self, id: &str) -> Result<Option<AnalyzedRecord>>;

    /// Retrieve a record by original value. Case-insensitive: folding
    /// happens at the store boundary.
    async fn get_by_value(&self, value: &str) -> Result<Option<AnalyzedRecord>>;

    /// All records, in no particular order. Filtering happens in-memory
    /// in the engine, not in the store.
    async fn list_all(&self) -> Result<Vec<AnalyzedRecord>>;

    /// Delete a record by original value, case-insensitively. Returns
    /// `false` when nothing matched.
    async fn delete_by_value(&self, value: &str) -> Result<bool>;
}

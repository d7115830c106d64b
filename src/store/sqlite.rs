//! SQLite-backed [`RecordStore`] implementation.
//!
//! The frequency map is stored as a JSON text column and `created_at` as
//! unix seconds. Uniqueness rides on the `id` primary key: an insert that
//! trips the constraint is reported as [`PutOutcome::Conflict`] rather
//! than an error, so concurrent creates of identical text race safely.
//! Value lookups fold with `LOWER()` in SQL.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::models::AnalyzedRecord;

use super::{PutOutcome, RecordStore};

const RECORD_COLUMNS: &str = "id, value, length, is_palindrome, unique_characters, \
     word_count, sha256_hash, character_frequency_json, created_at";

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: &SqliteRow) -> Result<AnalyzedRecord> {
    let frequency_json: String = row.get("character_frequency_json");
    let character_frequency: HashMap<String, i64> = serde_json::from_str(&frequency_json)?;
    let created_at: i64 = row.get("created_at");

    Ok(AnalyzedRecord {
        id: row.get("id"),
        value: row.get("value"),
        length: row.get("length"),
        is_palindrome: row.get("is_palindrome"),
        unique_characters: row.get("unique_characters"),
        word_count: row.get("word_count"),
        sha256_hash: row.get("sha256_hash"),
        character_frequency,
        created_at: DateTime::from_timestamp(created_at, 0).unwrap_or_default(),
    })
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn put(&self, record: &AnalyzedRecord) -> Result<PutOutcome> {
        let frequency_json = serde_json::to_string(&record.character_frequency)?;

        let result = sqlx::query(
            "INSERT INTO strings (id, value, length, is_palindrome, unique_characters, \
             word_count, sha256_hash, character_frequency_json, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.value)
        .bind(record.length)
        .bind(record.is_palindrome)
        .bind(record.unique_characters)
        .bind(record.word_count)
        .bind(&record.sha256_hash)
        .bind(&frequency_json)
        .bind(record.created_at.timestamp())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(PutOutcome::Inserted),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(PutOutcome::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<AnalyzedRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM strings WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn get_by_value(&self, value: &str) -> Result<Option<AnalyzedRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM strings WHERE LOWER(value) = LOWER(?) LIMIT 1"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn list_all(&self) -> Result<Vec<AnalyzedRecord>> {
        let rows = sqlx::query(&format!("SELECT {RECORD_COLUMNS} FROM strings"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_record).collect()
    }

    async fn delete_by_value(&self, value: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM strings WHERE LOWER(value) = LOWER(?)")
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

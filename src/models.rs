//! Core data types: the stored record, its computed properties, the
//! transient filter set, and the JSON response shapes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored, analyzed string. Identity is the SHA-256 of `value`, so the
/// record is immutable once created: changing any analysis field would
/// break the key.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedRecord {
    /// Lowercase hex SHA-256 of `value`. Primary key.
    pub id: String,
    /// Original text, case preserved.
    pub value: String,
    /// UTF-16 code-unit length of `value`.
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    /// Same digest as `id`, kept for the response shape.
    pub sha256_hash: String,
    /// Per-character occurrence counts over the case-folded text.
    pub character_frequency: HashMap<String, i64>,
    pub created_at: DateTime<Utc>,
}

/// Structural properties computed by [`crate::analyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringProperties {
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    pub sha256_hash: String,
    pub character_frequency_map: HashMap<String, i64>,
}

/// Optional constraints applied when listing records. Absent fields hold
/// vacuously; the set is never persisted. Serialization omits absent
/// fields so the echo shapes only name constraints that were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on `length`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on `length`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    /// Single character that must appear in `value`, case-sensitively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }
}

/// Echo of a natural-language query and the filter set it resolved to,
/// returned to the caller for transparency.
#[derive(Debug, Clone, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Single-record response shape.
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl From<AnalyzedRecord> for RecordResponse {
    fn from(record: AnalyzedRecord) -> Self {
        RecordResponse {
            id: record.id,
            value: record.value,
            properties: StringProperties {
                length: record.length,
                is_palindrome: record.is_palindrome,
                unique_characters: record.unique_characters,
                word_count: record.word_count,
                sha256_hash: record.sha256_hash,
                character_frequency_map: record.character_frequency,
            },
            created_at: record.created_at,
        }
    }
}

/// Response for structured list queries. `filters_applied` is omitted
/// entirely when no constraint was supplied, distinguishing "no filters"
/// from "filters that matched nothing".
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<RecordResponse>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<FilterSet>,
}

/// Response for natural-language queries.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<RecordResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

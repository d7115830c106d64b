//! Query engine: orchestrates the analyzer, the record store, the filter
//! matcher, and the natural-language interpreter.
//!
//! The engine is stateless between requests. Retrieval always reads the
//! whole store and filters in-memory; creation inserts and lets the store
//! report a hash conflict, never retrying or upserting.

use std::sync::Arc;

use chrono::Utc;

use crate::analyzer;
use crate::error::EngineError;
use crate::interpret;
use crate::models::{
    AnalyzedRecord, FilterSet, InterpretedQuery, ListResponse, NaturalLanguageResponse,
    RecordResponse,
};
use crate::store::{PutOutcome, RecordStore};

pub struct Engine {
    store: Arc<dyn RecordStore>,
}

impl Engine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Analyzes `value` and persists the result keyed by content hash.
    ///
    /// A hash collision with an existing record surfaces as
    /// [`EngineError::AlreadyExists`]; the stored record is untouched.
    pub async fn analyze_and_store(&self, value: &str) -> Result<AnalyzedRecord, EngineError> {
        let props = analyzer::analyze(value)?;

        let record = AnalyzedRecord {
            id: props.sha256_hash.clone(),
            value: value.to_string(),
            length: props.length,
            is_palindrome: props.is_palindrome,
            unique_characters: props.unique_characters,
            word_count: props.word_count,
            sha256_hash: props.sha256_hash,
            character_frequency: props.character_frequency_map,
            created_at: Utc::now(),
        };

        match self.store.put(&record).await? {
            PutOutcome::Inserted => Ok(record),
            PutOutcome::Conflict => Err(EngineError::AlreadyExists),
        }
    }

    /// Looks up a record by its original value, case-insensitively.
    pub async fn get_one(&self, value: &str) -> Result<AnalyzedRecord, EngineError> {
        self.store
            .get_by_value(value)
            .await?
            .ok_or(EngineError::NotFound)
    }

    /// Lists records matching `filters`, echoing the applied constraints.
    /// The echo is absent when no constraint was supplied.
    pub async fn list_filtered(&self, filters: FilterSet) -> Result<ListResponse, EngineError> {
        filters
            .validate()
            .map_err(|v| EngineError::InvalidFilter(v.0))?;

        let data = self.matching_records(&filters).await?;
        let count = data.len();
        let filters_applied = if filters.is_empty() {
            None
        } else {
            Some(filters)
        };

        Ok(ListResponse {
            data,
            count,
            filters_applied,
        })
    }

    /// Interprets a natural-language query and lists the matching records,
    /// echoing the interpretation alongside the results.
    pub async fn filter_by_natural_language(
        &self,
        query: &str,
    ) -> Result<NaturalLanguageResponse, EngineError> {
        let filters = interpret::interpret(query)?;

        let data = self.matching_records(&filters).await?;
        let count = data.len();

        Ok(NaturalLanguageResponse {
            data,
            count,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: filters,
            },
        })
    }

    /// Deletes a record by its original value, case-insensitively.
    pub async fn delete(&self, value: &str) -> Result<(), EngineError> {
        if self.store.delete_by_value(value).await? {
            Ok(())
        } else {
            Err(EngineError::NotFound)
        }
    }

    async fn matching_records(
        &self,
        filters: &FilterSet,
    ) -> Result<Vec<RecordResponse>, EngineError> {
        let records = self.store.list_all().await?;
        Ok(records
            .into_iter()
            .filter(|r| filters.matches(r))
            .map(RecordResponse::from)
            .collect())
    }
}

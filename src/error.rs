//! Error taxonomy shared by the engine, the CLI, and the HTTP server.
//!
//! Each variant maps 1:1 to a response status at the transport boundary:
//! `InvalidValue`/`InvalidFilter`/`InvalidQuery` → 400, `NotFound` → 404,
//! `AlreadyExists` → 409, `InvalidType`/`ConflictingFilters` → 422,
//! `Store` → 500. Errors are raised at the point of detection and surfaced
//! unchanged; the engine never recovers into a partial result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The `value` field of an analysis request was not a string.
    /// Detected at the transport boundary, where the body is still untyped.
    #[error("'value' must be a string")]
    InvalidType,

    /// Analysis input or natural-language query was empty or whitespace-only.
    #[error("{0}")]
    InvalidValue(String),

    /// The content hash of the submitted text already exists in the store.
    #[error("string already exists in the system")]
    AlreadyExists,

    /// Lookup or delete by value found nothing.
    #[error("string does not exist in the system")]
    NotFound,

    /// Structured filter parameters violate the legality constraints.
    #[error("invalid query parameter values or types: {0}")]
    InvalidFilter(String),

    /// A natural-language query matched none of the known patterns.
    #[error("unable to parse natural language query")]
    InvalidQuery,

    /// Natural-language interpretation produced a filter set that violates
    /// the same legality constraints as `InvalidFilter`. Kept distinct
    /// because the fault lies in the query phrasing, not in caller-supplied
    /// structured parameters.
    #[error("query parsed but resulted in conflicting filters")]
    ConflictingFilters,

    /// Failure inside the record store.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

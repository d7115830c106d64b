//! HTTP server exposing the analysis and query engine as a JSON API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/strings` | Analyze and store a string |
//! | `GET` | `/strings` | List records, optionally filtered by query params |
//! | `GET` | `/strings/filter-by-natural-language?query=` | Filter via free-text query |
//! | `GET` | `/strings/{value}` | Look up a record by value (case-insensitive) |
//! | `DELETE` | `/strings/{value}` | Delete a record by value (case-insensitive) |
//! | `GET` | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! All error responses carry one shape:
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "query cannot be empty" } }
//! ```
//!
//! Codes: `bad_request` (400), `not_found` (404), `conflict` (409),
//! `unprocessable` (422), `internal` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::engine::Engine;
use crate::error::EngineError;
use crate::models::{FilterSet, RecordResponse};

#[derive(Clone)]
struct AppState {
    engine: Arc<Engine>,
}

/// Starts the HTTP server on `bind_addr`, serving until the process exits.
pub async fn run_server(bind_addr: &str, engine: Arc<Engine>) -> anyhow::Result<()> {
    let app = router(engine);

    println!("stringlens server listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the router. Split from [`run_server`] so tests can drive the
/// service without binding a socket.
pub fn router(engine: Arc<Engine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/strings", get(handle_list).post(handle_create))
        .route(
            "/strings/filter-by-natural-language",
            get(handle_natural_language),
        )
        .route(
            "/strings/{value}",
            get(handle_get).delete(handle_delete),
        )
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(AppState { engine })
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`, `"conflict"`).
    code: String,
    /// Human-readable error message.
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        let (status, code) = match &err {
            EngineError::InvalidValue(_)
            | EngineError::InvalidFilter(_)
            | EngineError::InvalidQuery => (StatusCode::BAD_REQUEST, "bad_request"),
            EngineError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            EngineError::AlreadyExists => (StatusCode::CONFLICT, "conflict"),
            EngineError::InvalidType | EngineError::ConflictingFilters => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
            EngineError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        let message = match &err {
            // Store internals stay out of responses
            EngineError::Store(_) => "an unexpected error occurred".to_string(),
            _ => err.to_string(),
        };
        AppError {
            status,
            code: code.to_string(),
            message,
        }
    }
}

// ============ Handlers ============

/// POST /strings — the body is taken untyped so a missing, null, or
/// non-string `value` field can be rejected as a type error (422) rather
/// than a generic deserialization failure.
async fn handle_create(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, AppError> {
    let value = match body.get("value") {
        Some(serde_json::Value::String(s)) => s.clone(),
        _ => return Err(EngineError::InvalidType.into()),
    };

    let record = state.engine.analyze_and_store(&value).await?;
    Ok((StatusCode::CREATED, Json(RecordResponse::from(record))).into_response())
}

/// Raw query parameters for GET /strings. Kept as strings so malformed
/// values surface as the engine's filter error, not a framework rejection.
#[derive(Debug, Default, Deserialize)]
struct ListParams {
    is_palindrome: Option<String>,
    min_length: Option<String>,
    max_length: Option<String>,
    word_count: Option<String>,
    contains_character: Option<String>,
}

fn parse_flag(name: &str, raw: Option<String>) -> Result<Option<bool>, EngineError> {
    match raw {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| EngineError::InvalidFilter(format!("{name} must be a boolean"))),
    }
}

fn parse_int(name: &str, raw: Option<String>) -> Result<Option<i64>, EngineError> {
    match raw {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| EngineError::InvalidFilter(format!("{name} must be an integer"))),
    }
}

impl ListParams {
    fn into_filters(self) -> Result<FilterSet, EngineError> {
        Ok(FilterSet {
            is_palindrome: parse_flag("is_palindrome", self.is_palindrome)?,
            min_length: parse_int("min_length", self.min_length)?,
            max_length: parse_int("max_length", self.max_length)?,
            word_count: parse_int("word_count", self.word_count)?,
            contains_character: self.contains_character,
        })
    }
}

async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let filters = params.into_filters()?;
    let response = state.engine.list_filtered(filters).await?;
    Ok(Json(response).into_response())
}

#[derive(Debug, Deserialize)]
struct NaturalLanguageParams {
    #[serde(default)]
    query: String,
}

async fn handle_natural_language(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> Result<Response, AppError> {
    let response = state
        .engine
        .filter_by_natural_language(&params.query)
        .await?;
    Ok(Json(response).into_response())
}

async fn handle_get(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Response, AppError> {
    let record = state.engine.get_one(&value).await?;
    Ok(Json(RecordResponse::from(record)).into_response())
}

async fn handle_delete(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Response, AppError> {
    state.engine.delete(&value).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

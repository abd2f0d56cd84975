//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Handlers decode the
//! query, call the engine and map the outcome onto a status code. They never
//! lock anything: the engine serializes its own operations.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheEngine;
use crate::error::{CacheError, Result};
use crate::models::{CheckAndSetQuery, HealthResponse, KeyQuery, StatsResponse, WriteQuery};

/// Query extractor whose rejection is turned into a JSON `CacheError`.
pub type QueryResult<T> = std::result::Result<Query<T>, QueryRejection>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub cache: Arc<CacheEngine>,
}

impl AppState {
    /// Creates a new AppState around an engine.
    pub fn new(cache: CacheEngine) -> Self {
        Self::from_shared(Arc::new(cache))
    }

    pub fn from_shared(cache: Arc<CacheEngine>) -> Self {
        Self { cache }
    }
}

/// Handler for /get?key=
///
/// Answers with the raw value as text, or 404 on a miss.
pub async fn get_handler(
    State(state): State<AppState>,
    query: QueryResult<KeyQuery>,
) -> Result<String> {
    let Query(query) = query?;
    state
        .cache
        .get(&query.key)
        .ok_or(CacheError::NotFound(query.key))
}

/// Handler for /set?key=&value=&expire=
pub async fn set_handler(
    State(state): State<AppState>,
    query: QueryResult<WriteQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    state.cache.put(&query.key, &query.value, query.expire);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for /delete?key=
///
/// Succeeds whether or not the key existed.
pub async fn delete_handler(
    State(state): State<AppState>,
    query: QueryResult<KeyQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    state.cache.delete(&query.key);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for /checkandset?key=&value=&compare=&expire=
///
/// 204 when the write happened, 400 on a compare mismatch.
pub async fn check_and_set_handler(
    State(state): State<AppState>,
    query: QueryResult<CheckAndSetQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    if state
        .cache
        .check_and_set(&query.key, &query.value, &query.compare, query.expire)
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CacheError::CompareMismatch(query.key))
    }
}

/// Handler for /increment?key=&value=&expire=
pub async fn increment_handler(
    State(state): State<AppState>,
    query: QueryResult<WriteQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    state
        .cache
        .increment(&query.key, &query.value, query.expire)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for /decrement?key=&value=&expire=
pub async fn decrement_handler(
    State(state): State<AppState>,
    query: QueryResult<WriteQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    state
        .cache
        .decrement(&query.key, &query.value, query.expire)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for /append?key=&value=&expire=
pub async fn append_handler(
    State(state): State<AppState>,
    query: QueryResult<WriteQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    state.cache.append(&query.key, &query.value, query.expire);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for /prepend?key=&value=&expire=
pub async fn prepend_handler(
    State(state): State<AppState>,
    query: QueryResult<WriteQuery>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    state.cache.prepend(&query.key, &query.value, query.expire);
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for /flush
pub async fn flush_handler(State(state): State<AppState>) -> StatusCode {
    state.cache.flush();
    StatusCode::NO_CONTENT
}

/// Handler for /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.cache.stats()))
}

/// Handler for /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

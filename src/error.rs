//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache (missing or expired)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Operand or stored value of increment/decrement is not an integer
    #[error("Not an integer: {0:?}")]
    InvalidNumber(String),

    /// Increment or decrement would overflow a 64-bit integer
    #[error("Numeric overflow on key: {0}")]
    NumericOverflow(String),

    /// Check-and-set compare value did not match the stored value
    #[error("Compare value mismatch for key: {0}")]
    CompareMismatch(String),

    /// Query string that could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// HTTP status this error maps to at the API boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidNumber(_)
            | CacheError::NumericOverflow(_)
            | CacheError::CompareMismatch(_)
            | CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// A query string serde can't decode (e.g. a repeated parameter) is a bad
// request like any other, answered with the JSON error body.
impl From<QueryRejection> for CacheError {
    fn from(rejection: QueryRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));

        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

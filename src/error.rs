//! Error types for the caching layer
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the caching layer.
///
/// An absent key is not an error: `retrieve` reports absence as `None` so
/// callers can tell "no such key" apart from a stored empty value. The
/// variants here cover the failures that do propagate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A store operation could not complete (connection refused, protocol
    /// failure, ...). Never swallowed: a generated key must not be returned
    /// for a value that was never durably written.
    #[error("store unreachable: {0}")]
    StoreUnreachable(String),

    /// Key not found. Raised only at the HTTP surface, where absence maps
    /// to a 404; the library itself returns `None` instead.
    #[error("key not found: {0}")]
    NotFound(String),

    /// A key holds the wrong kind of value for the requested operation
    /// (list operation on a string key, increment on non-numeric bytes).
    #[error("wrong value kind at key: {0}")]
    WrongType(String),

    /// A decoder could not interpret bytes that were present.
    #[error("decode failure: {0}")]
    Decode(String),

    /// Invalid request data at the HTTP surface.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::StoreUnreachable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            CacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CacheError::WrongType(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            CacheError::Decode(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the caching layer.
pub type Result<T> = std::result::Result<T, CacheError>;

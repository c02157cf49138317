//! Request DTOs for the caching layer API
//!
//! Defines the structure of incoming HTTP request bodies and queries.

use serde::Deserialize;

use crate::cache::CacheValue;
use crate::error::{CacheError, Result};

/// Request body for the store operation (POST /store)
///
/// # Fields
/// - `value`: The value to store; a JSON string, integer or float
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The value to store
    pub value: serde_json::Value,
}

impl StoreRequest {
    /// Converts the JSON payload into a cache value.
    ///
    /// Only scalar payloads are storable; arrays, objects, booleans and
    /// null are rejected as invalid requests.
    pub fn into_cache_value(self) -> Result<CacheValue> {
        match self.value {
            serde_json::Value::String(text) => Ok(CacheValue::Text(text)),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Ok(CacheValue::Int(int))
                } else if let Some(float) = number.as_f64() {
                    Ok(CacheValue::Float(float))
                } else {
                    Err(CacheError::InvalidRequest(format!(
                        "number out of storable range: {number}"
                    )))
                }
            }
            other => Err(CacheError::InvalidRequest(format!(
                "value must be a string or number, got {other}"
            ))),
        }
    }
}

/// Query parameters for the retrieve operation (GET /retrieve/:key)
#[derive(Debug, Clone, Deserialize)]
pub struct RetrieveQuery {
    /// How to project the stored bytes into JSON
    #[serde(default)]
    pub decode: DecodeKind,
}

/// Decoder selection for retrieval over HTTP.
///
/// JSON cannot carry raw bytes, so the surface always projects through a
/// decoder; text is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeKind {
    Text,
    Int,
}

impl Default for DecodeKind {
    fn default() -> Self {
        DecodeKind::Text
    }
}

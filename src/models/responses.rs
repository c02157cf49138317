//! Response DTOs for the caching layer API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::track::ReplayReport;

/// Response body for the store operation (POST /store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The generated key the value lives under
    pub key: String,
}

impl StoreResponse {
    /// Creates a new StoreResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Value stored under key '{}'", key),
            key,
        }
    }
}

/// Response body for the retrieve operation (GET /retrieve/:key)
#[derive(Debug, Clone, Serialize)]
pub struct RetrieveResponse {
    /// The requested key
    pub key: String,
    /// The stored value, projected through the requested decoder
    pub value: serde_json::Value,
}

impl RetrieveResponse {
    /// Creates a new RetrieveResponse
    pub fn new(key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One recorded call in a replay response
#[derive(Debug, Clone, Serialize)]
pub struct ReplayPair {
    /// Rendered argument tuple
    pub input: String,
    /// Rendered result
    pub output: String,
}

/// Response body for the replay operation (GET /replay/:method)
#[derive(Debug, Clone, Serialize)]
pub struct ReplayResponse {
    /// Identity of the inspected method
    pub method: String,
    /// How many times the method was called
    pub calls: u64,
    /// Recorded input/output pairs, in call order
    pub pairs: Vec<ReplayPair>,
}

impl From<ReplayReport> for ReplayResponse {
    fn from(report: ReplayReport) -> Self {
        Self {
            method: report.method.to_string(),
            calls: report.calls,
            pairs: report
                .pairs
                .into_iter()
                .map(|pair| ReplayPair {
                    input: pair.input,
                    output: pair.output,
                })
                .collect(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

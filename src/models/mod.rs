//! Request and Response models for the caching layer API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{DecodeKind, RetrieveQuery, StoreRequest};
pub use responses::{
    ErrorResponse, HealthResponse, ReplayPair, ReplayResponse, RetrieveResponse, StoreResponse,
};

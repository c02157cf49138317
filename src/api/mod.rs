//! API Module
//!
//! HTTP handlers and routing for the caching layer REST API.
//!
//! # Endpoints
//! - `POST /store` - Store a value under a generated key
//! - `GET /retrieve/:key` - Retrieve a value by key
//! - `GET /replay/:method` - Inspect a tracked method's recorded usage
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

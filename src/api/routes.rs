//! API Routes
//!
//! Configures the Axum router with all caching layer endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, replay_handler, retrieve_handler, store_handler, AppState};
use crate::store::KeyValueStore;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /store` - Store a value under a generated key
/// - `GET /retrieve/:key` - Retrieve a value by key
/// - `GET /replay/:method` - Inspect a tracked method's recorded usage
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<S: KeyValueStore + 'static>(state: AppState<S>) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/store", post(store_handler::<S>))
        .route("/retrieve/:key", get(retrieve_handler::<S>))
        .route("/replay/:method", get(replay_handler::<S>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

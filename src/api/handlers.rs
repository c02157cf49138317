//! API Handlers
//!
//! HTTP request handlers for each caching layer endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::Cache;
use crate::error::{CacheError, Result};
use crate::models::{
    DecodeKind, HealthResponse, ReplayResponse, RetrieveQuery, RetrieveResponse, StoreRequest,
    StoreResponse,
};
use crate::store::KeyValueStore;
use crate::track::MethodId;

/// Application state shared across all handlers.
///
/// Holds the instrumented cache; handlers stay generic over the backing
/// store so the same surface serves the in-memory and the live backend.
pub struct AppState<S> {
    /// The instrumented cache
    pub cache: Arc<Cache<S>>,
}

// Derived Clone would demand S: Clone, which the Arc makes unnecessary.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<S: KeyValueStore + 'static> AppState<S> {
    /// Creates a new AppState over an opened cache.
    pub fn new(cache: Cache<S>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }
}

/// Handler for POST /store
///
/// Stores a scalar value and returns the generated key.
pub async fn store_handler<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    let value = req.into_cache_value()?;
    let key = state.cache.store(value).await?;

    Ok(Json(StoreResponse::new(key)))
}

/// Handler for GET /retrieve/:key
///
/// Retrieves a value by key, projected through the decoder the query
/// selects. Absence maps to a 404 at this surface.
pub async fn retrieve_handler<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(key): Path<String>,
    Query(query): Query<RetrieveQuery>,
) -> Result<Json<RetrieveResponse>> {
    let value = match query.decode {
        DecodeKind::Text => state
            .cache
            .retrieve_text(&key)
            .await?
            .map(serde_json::Value::from),
        DecodeKind::Int => state
            .cache
            .retrieve_int(&key)
            .await?
            .map(serde_json::Value::from),
    };

    match value {
        Some(value) => Ok(Json(RetrieveResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /replay/:method
///
/// Inspects the recorded usage of a tracked method. Identities that were
/// never tracked are a valid, empty answer.
pub async fn replay_handler<S: KeyValueStore + 'static>(
    State(state): State<AppState<S>>,
    Path(method): Path<String>,
) -> Result<Json<ReplayResponse>> {
    let (owner, name) = method
        .split_once('.')
        .filter(|(owner, name)| !owner.is_empty() && !name.is_empty())
        .ok_or_else(|| {
            CacheError::InvalidRequest(format!(
                "method identity must look like Owner.method, got '{method}'"
            ))
        })?;

    let id = MethodId::new(owner, name);
    let report = state.cache.replay(&id).await?;

    Ok(Json(ReplayResponse::from(report)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    async fn test_state() -> AppState<MemoryStore> {
        let cache = Cache::open(MemoryStore::new()).await.unwrap();
        AppState::new(cache)
    }

    fn store_req(body: &str) -> StoreRequest {
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_store_and_retrieve_handler() {
        let state = test_state().await;

        let stored = store_handler(State(state.clone()), Json(store_req(r#"{"value": "hello"}"#)))
            .await
            .unwrap();

        let retrieved = retrieve_handler(
            State(state.clone()),
            Path(stored.key.clone()),
            Query(RetrieveQuery {
                decode: DecodeKind::Text,
            }),
        )
        .await
        .unwrap();

        assert_eq!(retrieved.key, stored.key);
        assert_eq!(retrieved.value, serde_json::Value::from("hello"));
    }

    #[tokio::test]
    async fn test_retrieve_handler_int_projection() {
        let state = test_state().await;

        let stored = store_handler(State(state.clone()), Json(store_req(r#"{"value": 42}"#)))
            .await
            .unwrap();

        let retrieved = retrieve_handler(
            State(state),
            Path(stored.key.clone()),
            Query(RetrieveQuery {
                decode: DecodeKind::Int,
            }),
        )
        .await
        .unwrap();

        assert_eq!(retrieved.value, serde_json::Value::from(42i64));
    }

    #[tokio::test]
    async fn test_retrieve_nonexistent_key() {
        let state = test_state().await;

        let result = retrieve_handler(
            State(state),
            Path("nonexistent".to_string()),
            Query(RetrieveQuery {
                decode: DecodeKind::Text,
            }),
        )
        .await;

        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_store_rejects_non_scalar() {
        let state = test_state().await;

        let result = store_handler(State(state), Json(store_req(r#"{"value": [1, 2]}"#))).await;

        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_replay_handler_reports_usage() {
        let state = test_state().await;

        for value in [r#"{"value": "a"}"#, r#"{"value": "b"}"#] {
            store_handler(State(state.clone()), Json(store_req(value)))
                .await
                .unwrap();
        }

        let report = replay_handler(State(state), Path("Cache.store".to_string()))
            .await
            .unwrap();

        assert_eq!(report.method, "Cache.store");
        assert_eq!(report.calls, 2);
        assert_eq!(report.pairs[0].input, "('a',)");
        assert_eq!(report.pairs[1].input, "('b',)");
    }

    #[tokio::test]
    async fn test_replay_handler_untracked_identity() {
        let state = test_state().await;

        let report = replay_handler(State(state), Path("Cache.evict".to_string()))
            .await
            .unwrap();

        assert_eq!(report.calls, 0);
        assert!(report.pairs.is_empty());
    }

    #[tokio::test]
    async fn test_replay_handler_rejects_malformed_identity() {
        let state = test_state().await;

        for bad in ["store", ".store", "Cache."] {
            let result = replay_handler(State(state.clone()), Path(bad.to_string())).await;
            assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
        }
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

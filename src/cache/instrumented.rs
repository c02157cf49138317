//! Instrumented Cache Module
//!
//! The cache facade. Values go in under generated keys, and every store
//! call flows through the counting and history layers before the write, so
//! a populated instance can always answer how it has been used.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cache::{decode, CacheValue};
use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;
use crate::track::{
    self, CallCount, CallHistory, Interceptor, MethodId, Next, Operation, ReplayReport,
    TrackedCall,
};

// == Tracked Identities ==
/// Identity of [`Cache::store`], the one tracked operation.
pub const STORE_METHOD: MethodId = MethodId::from_static("Cache.store");

// == Store Operation ==
/// Terminal of the store chain: generates a fresh key and writes the value.
struct StoreOp<S> {
    store: Arc<S>,
}

#[async_trait]
impl<S: KeyValueStore> Operation for StoreOp<S> {
    async fn execute(&self, call: &TrackedCall) -> Result<String> {
        let value = call.args.first().ok_or_else(|| {
            CacheError::InvalidRequest("store call carries no value argument".to_string())
        })?;

        let key = Uuid::new_v4().to_string();
        self.store.set(&key, &value.to_bytes()).await?;
        debug!(key = %key, "stored value");

        Ok(key)
    }
}

// == Instrumented Cache ==
/// Key-value cache that records its own usage.
///
/// Each instance owns one store handle. Opening flushes the namespace so
/// counters and histories start from zero; from then on every `store` call
/// is counted and recorded by the fixed interceptor chain, while reads go
/// straight to the store.
pub struct Cache<S> {
    store: Arc<S>,
    layers: Vec<Arc<dyn Interceptor>>,
    op: StoreOp<S>,
}

impl<S: KeyValueStore + 'static> Cache<S> {
    // == Lifecycle ==
    /// Opens a cache over a store handle.
    ///
    /// # Arguments
    /// * `store` - The backing store; the cache takes ownership
    ///
    /// # Returns
    /// A cache on a freshly flushed namespace, or the flush error.
    pub async fn open(store: S) -> Result<Self> {
        let store = Arc::new(store);
        store.flush().await?;

        // Counting stays outermost so failed attempts are still counted.
        let layers: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(CallCount::new(store.clone())),
            Arc::new(CallHistory::new(store.clone())),
        ];

        info!("cache opened on a fresh namespace");

        Ok(Self {
            op: StoreOp {
                store: store.clone(),
            },
            store,
            layers,
        })
    }

    /// Closes the cache and releases its store handle.
    pub fn close(self) {
        debug!("cache closed");
    }

    // == Write Path ==
    /// Stores a value under a fresh UUID key and returns the key.
    ///
    /// The call runs through the interceptor chain, so it is counted and
    /// recorded before the write happens. On failure the error propagates
    /// and no key is returned.
    ///
    /// # Arguments
    /// * `value` - Anything convertible to a [`CacheValue`]
    pub async fn store(&self, value: impl Into<CacheValue>) -> Result<String> {
        let call = TrackedCall::new(STORE_METHOD, vec![value.into()]);
        Next::new(&self.layers, &self.op).run(&call).await
    }

    // == Read Path ==
    /// Reads back the raw bytes stored under a key. `None` means the key
    /// was never stored, which is distinct from a stored empty value.
    pub async fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store.get(key).await
    }

    /// Reads a key and projects present bytes through a decoder.
    ///
    /// The decoder only runs when the key exists; absence stays `None`
    /// regardless of the decoder's type.
    pub async fn retrieve_with<T>(
        &self,
        key: &str,
        decoder: impl FnOnce(&[u8]) -> Result<T>,
    ) -> Result<Option<T>> {
        match self.store.get(key).await? {
            Some(bytes) => Ok(Some(decoder(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Reads a key as UTF-8 text.
    pub async fn retrieve_text(&self, key: &str) -> Result<Option<String>> {
        self.retrieve_with(key, decode::text).await
    }

    /// Reads a key as a base-10 integer.
    pub async fn retrieve_int(&self, key: &str) -> Result<Option<i64>> {
        self.retrieve_with(key, decode::int).await
    }

    // == Inspection ==
    /// Reconstructs the recorded usage of a tracked method.
    pub async fn replay(&self, method: &MethodId) -> Result<ReplayReport> {
        track::replay(self.store.as_ref(), method).await
    }
}

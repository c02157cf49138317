//! Call Count Module
//!
//! Interceptor that counts how many times a tracked method is invoked.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::store::KeyValueStore;
use crate::track::{Interceptor, Next, TrackedCall};

// == Call Count Layer ==
/// Counts invocations under the method's identity key.
///
/// The counter is bumped before delegating, so it counts attempts rather
/// than completions; a delegate failure still leaves its attempt recorded.
pub struct CallCount<S> {
    store: Arc<S>,
}

impl<S> CallCount<S> {
    /// Creates a counting layer over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: KeyValueStore> Interceptor for CallCount<S> {
    async fn invoke(&self, call: &TrackedCall, next: Next<'_>) -> Result<String> {
        let count = self.store.increment(call.method.key()).await?;
        debug!(method = %call.method, count, "recorded call");
        next.run(call).await
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::store::MemoryStore;
    use crate::track::{MethodId, Operation};

    struct OkOp;

    #[async_trait]
    impl Operation for OkOp {
        async fn execute(&self, _call: &TrackedCall) -> Result<String> {
            Ok("done".to_string())
        }
    }

    struct FailingOp;

    #[async_trait]
    impl Operation for FailingOp {
        async fn execute(&self, _call: &TrackedCall) -> Result<String> {
            Err(CacheError::StoreUnreachable("boom".to_string()))
        }
    }

    fn call() -> TrackedCall {
        TrackedCall::new(MethodId::from_static("Test.op"), Vec::new())
    }

    async fn run_once(store: Arc<MemoryStore>, op: &dyn Operation) -> Result<String> {
        let layers: Vec<Arc<dyn Interceptor>> = vec![Arc::new(CallCount::new(store))];
        Next::new(&layers, op).run(&call()).await
    }

    #[tokio::test]
    async fn test_each_invocation_counts_once() {
        let store = Arc::new(MemoryStore::new());

        for _ in 0..3 {
            run_once(store.clone(), &OkOp).await.unwrap();
        }

        assert_eq!(store.get("Test.op").await.unwrap(), Some(b"3".to_vec()));
    }

    #[tokio::test]
    async fn test_delegate_result_passes_through() {
        let store = Arc::new(MemoryStore::new());

        let result = run_once(store, &OkOp).await.unwrap();
        assert_eq!(result, "done");
    }

    #[tokio::test]
    async fn test_failed_attempt_is_still_counted() {
        let store = Arc::new(MemoryStore::new());

        let result = run_once(store.clone(), &FailingOp).await;

        assert!(result.is_err());
        assert_eq!(store.get("Test.op").await.unwrap(), Some(b"1".to_vec()));
    }
}

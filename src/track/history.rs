//! Call History Module
//!
//! Interceptor that records what a tracked method was called with and what
//! it returned, as two append-only lists in the store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::render_args;
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::track::{Interceptor, Next, TrackedCall};

// == Call History Layer ==
/// Records each invocation's rendered argument tuple and rendered result.
///
/// Inputs land in `<identity>:inputs` and outputs in `<identity>:outputs`,
/// paired by position. A per-identity lock is held across the whole
/// append-delegate-append window, so concurrent callers in this process
/// cannot interleave their entries. When the delegate fails, the input
/// entry stays behind with no matching output; replay truncates it away.
pub struct CallHistory<S> {
    store: Arc<S>,
    gates: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S> CallHistory<S> {
    /// Creates a history layer over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the serialization gate for one identity, creating it on
    /// first use.
    async fn gate(&self, key: &str) -> Arc<Mutex<()>> {
        let mut gates = self.gates.lock().await;
        gates.entry(key.to_string()).or_default().clone()
    }
}

#[async_trait]
impl<S: KeyValueStore> Interceptor for CallHistory<S> {
    async fn invoke(&self, call: &TrackedCall, next: Next<'_>) -> Result<String> {
        let gate = self.gate(call.method.key()).await;
        let _serial = gate.lock().await;

        let rendered = render_args(&call.args);
        self.store
            .append_to_list(&call.method.inputs_key(), rendered.as_bytes())
            .await?;

        let output = next.run(call).await?;

        self.store
            .append_to_list(&call.method.outputs_key(), output.as_bytes())
            .await?;
        debug!(method = %call.method, input = %rendered, "recorded history entry");

        Ok(output)
    }
}

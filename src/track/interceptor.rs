//! Interceptor Module
//!
//! The layering machinery tracked calls flow through. A call is described
//! once, then passed down a chain of interceptors; each layer decides what
//! to record before and after handing the call to the next one, and the
//! terminal operation at the end does the real work.

use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::CacheValue;
use crate::error::Result;
use crate::track::MethodId;

// == Tracked Call ==
/// One invocation of a tracked method: its identity plus the positional
/// arguments, captured as values so layers can render them.
#[derive(Debug, Clone)]
pub struct TrackedCall {
    pub method: MethodId,
    pub args: Vec<CacheValue>,
}

impl TrackedCall {
    /// Creates a call description for a method invocation.
    pub fn new(method: MethodId, args: Vec<CacheValue>) -> Self {
        Self { method, args }
    }
}

// == Operation ==
/// Terminal of an interceptor chain. Executes the call for real and
/// returns its result rendered as the string the layers record.
#[async_trait]
pub trait Operation: Send + Sync {
    async fn execute(&self, call: &TrackedCall) -> Result<String>;
}

// == Interceptor ==
/// One layer of a chain. Receives the call and the continuation; the layer
/// decides when (and whether) to delegate.
#[async_trait]
pub trait Interceptor: Send + Sync {
    async fn invoke(&self, call: &TrackedCall, next: Next<'_>) -> Result<String>;
}

// == Continuation ==
/// The remainder of a chain: the layers still to run, then the terminal.
///
/// `run` consumes the continuation, so a layer can delegate at most once.
pub struct Next<'a> {
    layers: &'a [Arc<dyn Interceptor>],
    op: &'a dyn Operation,
}

impl<'a> Next<'a> {
    /// Builds the continuation covering a full chain.
    pub fn new(layers: &'a [Arc<dyn Interceptor>], op: &'a dyn Operation) -> Self {
        Self { layers, op }
    }

    /// Runs the head layer, or the terminal once no layers remain.
    pub async fn run(self, call: &TrackedCall) -> Result<String> {
        match self.layers.split_first() {
            Some((head, rest)) => {
                head.invoke(
                    call,
                    Next {
                        layers: rest,
                        op: self.op,
                    },
                )
                .await
            }
            None => self.op.execute(call).await,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    struct EchoOp;

    #[async_trait]
    impl Operation for EchoOp {
        async fn execute(&self, call: &TrackedCall) -> Result<String> {
            Ok(format!("executed {}", call.method))
        }
    }

    struct Marker {
        name: &'static str,
        trace: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Interceptor for Marker {
        async fn invoke(&self, call: &TrackedCall, next: Next<'_>) -> Result<String> {
            self.trace.lock().await.push(format!("{}:before", self.name));
            let result = next.run(call).await;
            self.trace.lock().await.push(format!("{}:after", self.name));
            result
        }
    }

    struct ShortCircuit;

    #[async_trait]
    impl Interceptor for ShortCircuit {
        async fn invoke(&self, _call: &TrackedCall, _next: Next<'_>) -> Result<String> {
            Ok("intercepted".to_string())
        }
    }

    fn call() -> TrackedCall {
        TrackedCall::new(MethodId::from_static("Test.op"), Vec::new())
    }

    #[tokio::test]
    async fn test_empty_chain_runs_terminal() {
        let layers: Vec<Arc<dyn Interceptor>> = Vec::new();
        let op = EchoOp;

        let result = Next::new(&layers, &op).run(&call()).await.unwrap();
        assert_eq!(result, "executed Test.op");
    }

    #[tokio::test]
    async fn test_layers_run_outermost_first() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let layers: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(Marker {
                name: "outer",
                trace: trace.clone(),
            }),
            Arc::new(Marker {
                name: "inner",
                trace: trace.clone(),
            }),
        ];
        let op = EchoOp;

        let result = Next::new(&layers, &op).run(&call()).await.unwrap();

        assert_eq!(result, "executed Test.op");
        let trace = trace.lock().await;
        assert_eq!(
            *trace,
            vec!["outer:before", "inner:before", "inner:after", "outer:after"]
        );
    }

    #[tokio::test]
    async fn test_layer_can_skip_the_terminal() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let layers: Vec<Arc<dyn Interceptor>> = vec![
            Arc::new(ShortCircuit),
            Arc::new(Marker {
                name: "never",
                trace: trace.clone(),
            }),
        ];
        let op = EchoOp;

        let result = Next::new(&layers, &op).run(&call()).await.unwrap();

        assert_eq!(result, "intercepted");
        assert!(trace.lock().await.is_empty());
    }
}

//! Replay Module
//!
//! Read-only inspector that reconstructs a tracked method's call history
//! from the store and renders it as a human-readable report.

use std::fmt;

use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;
use crate::track::MethodId;

// == Call Pair ==
/// One recorded invocation: its rendered argument tuple and rendered
/// result, correlated by position in the history lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPair {
    pub input: String,
    pub output: String,
}

// == Replay Report ==
/// Everything known about a tracked method's usage.
///
/// `calls` comes from the counter and may exceed `pairs.len()` when some
/// attempts failed before producing an output.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub method: MethodId,
    pub calls: u64,
    pub pairs: Vec<CallPair>,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} was called {} times:", self.method, self.calls)?;
        for pair in &self.pairs {
            writeln!(f, "{}(*{}) -> {}", self.method, pair.input, pair.output)?;
        }
        Ok(())
    }
}

// == Replay ==
/// Reconstructs the call history of a tracked method.
///
/// Reads the counter and both history lists, pairing inputs with outputs
/// positionally and truncating to the shorter list. Identities that were
/// never tracked yield a zero count and no pairs.
///
/// # Arguments
/// * `store` - The store the tracking layers wrote to
/// * `method` - Identity of the method to inspect
pub async fn replay<S: KeyValueStore>(store: &S, method: &MethodId) -> Result<ReplayReport> {
    let calls = match store.get(method.key()).await? {
        Some(raw) => std::str::from_utf8(&raw)
            .ok()
            .and_then(|text| text.parse::<u64>().ok())
            .ok_or_else(|| CacheError::Decode(format!("malformed call counter for {method}")))?,
        None => 0,
    };

    let inputs = store.range_of_list(&method.inputs_key(), 0, -1).await?;
    let outputs = store.range_of_list(&method.outputs_key(), 0, -1).await?;

    let pairs = inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| CallPair {
            input: String::from_utf8_lossy(&input).into_owned(),
            output: String::from_utf8_lossy(&output).into_owned(),
        })
        .collect();

    Ok(ReplayReport {
        method: method.clone(),
        calls,
        pairs,
    })
}

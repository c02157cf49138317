//! Memory Store Module
//!
//! In-process [`KeyValueStore`] backend over two hash maps, one per key
//! kind, guarded by a single async lock. Used by the test suite and as the
//! default service backend when no live store is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

// == Memory Store ==
/// In-memory key-value store with the same kind rules as the live store:
/// string keys and list keys share one namespace, and an operation on a key
/// of the other kind fails with a wrong-type error. Counters written by
/// [`increment`](KeyValueStore::increment) are stored as ASCII decimal
/// bytes, so a plain `get` on a counter key returns its textual value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    strings: HashMap<String, Vec<u8>>,
    lists: HashMap<String, Vec<Vec<u8>>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut inner = self.inner.write().await;
        // A set replaces whatever kind the key previously held.
        inner.lists.remove(key);
        inner.strings.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let inner = self.inner.read().await;
        if inner.lists.contains_key(key) {
            return Err(CacheError::WrongType(key.to_string()));
        }
        Ok(inner.strings.get(key).cloned())
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        // Parse-add-write under the write lock, so concurrent increments
        // never lose updates.
        let mut inner = self.inner.write().await;
        if inner.lists.contains_key(key) {
            return Err(CacheError::WrongType(key.to_string()));
        }
        let current = match inner.strings.get(key) {
            Some(raw) => std::str::from_utf8(raw)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or_else(|| CacheError::WrongType(key.to_string()))?,
            None => 0,
        };
        let next = current + 1;
        inner
            .strings
            .insert(key.to_string(), next.to_string().into_bytes());
        Ok(next)
    }

    async fn append_to_list(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.strings.contains_key(key) {
            return Err(CacheError::WrongType(key.to_string()));
        }
        inner
            .lists
            .entry(key.to_string())
            .or_default()
            .push(value.to_vec());
        Ok(())
    }

    async fn range_of_list(&self, key: &str, start: i64, end: i64) -> Result<Vec<Vec<u8>>> {
        let inner = self.inner.read().await;
        if inner.strings.contains_key(key) {
            return Err(CacheError::WrongType(key.to_string()));
        }
        let Some(list) = inner.lists.get(key) else {
            return Ok(Vec::new());
        };
        Ok(slice_range(list, start, end))
    }

    async fn flush(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.strings.clear();
        inner.lists.clear();
        debug!("memory store flushed");
        Ok(())
    }
}

// == Range Slicing ==
/// Applies the inclusive, negative-index-aware bounds convention to a list.
fn slice_range(list: &[Vec<u8>], start: i64, end: i64) -> Vec<Vec<u8>> {
    let len = list.len() as i64;
    let normalize = |index: i64| if index < 0 { len + index } else { index };

    let from = normalize(start).max(0);
    let to = normalize(end).min(len - 1);
    if from > to || from >= len {
        return Vec::new();
    }
    list[from as usize..=to as usize].to_vec()
}

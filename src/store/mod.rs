//! Store Module
//!
//! The key-value capability the cache is built on, plus its backends.
//!
//! The cache never talks to a concrete store type: it owns one handle to
//! anything implementing [`KeyValueStore`]. [`MemoryStore`] is the
//! in-process backend used by tests and the default service path; a live
//! Redis backend is available behind the `redis` feature.

mod memory;

#[cfg(feature = "redis")]
mod redis;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use memory::MemoryStore;

#[cfg(feature = "redis")]
pub use redis::RedisStore;

// == Key-Value Capability ==
/// Minimal capability interface to an external key-value store.
///
/// Keys are flat strings; values are raw bytes. Two kinds of key exist in
/// the namespace: string keys (written by [`set`](KeyValueStore::set) and
/// [`increment`](KeyValueStore::increment)) and list keys (written by
/// [`append_to_list`](KeyValueStore::append_to_list)). Accessing a key with
/// an operation of the other kind is a [`CacheError::WrongType`] error.
///
/// # Range bounds
/// [`range_of_list`](KeyValueStore::range_of_list) bounds are inclusive on
/// both ends. Negative indexes count from the end of the list (`-1` is the
/// last element), out-of-range bounds clamp to the list, and a normalized
/// start past the normalized end yields an empty sequence. `(0, -1)`
/// therefore always reads the whole list.
///
/// [`CacheError::WrongType`]: crate::error::CacheError::WrongType
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Durable write; overwrites any previous value (of either kind) under the key.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the raw bytes stored under the key, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Atomically increments the integer stored under the key and returns the
    /// new value. An absent key counts from 0, so the first increment yields 1.
    async fn increment(&self, key: &str) -> Result<i64>;

    /// Atomically appends a value to the list stored under the key, creating
    /// the list if absent. Append order is preserved.
    async fn append_to_list(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the slice `[start, end]` of the list stored under the key,
    /// in append order. An absent key yields an empty sequence.
    async fn range_of_list(&self, key: &str, start: i64, end: i64) -> Result<Vec<Vec<u8>>>;

    /// Clears every key in this store instance's namespace.
    async fn flush(&self) -> Result<()>;
}

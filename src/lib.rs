//! Recall Cache - An instrumented key-value caching layer
//!
//! Stores values under generated keys and records its own usage: every
//! store call is counted and its arguments and result are kept as
//! append-only history, ready to be replayed.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod track;

pub use api::AppState;
pub use cache::{Cache, CacheValue, STORE_METHOD};
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{KeyValueStore, MemoryStore};
pub use track::{MethodId, ReplayReport};

//! Redis Store Module
//!
//! Live [`KeyValueStore`] backend over a Redis server. Compiled only with
//! the `redis` feature. Counters and lists map directly onto INCR and
//! RPUSH/LRANGE, so the data a populated instance holds can be inspected
//! with any Redis client.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, ErrorKind};
use tracing::{debug, info};

use crate::error::{CacheError, Result};
use crate::store::KeyValueStore;

// == Redis Store ==
/// Redis-backed store sharing one multiplexed connection.
///
/// The connection manager reconnects on its own after a dropped link, so a
/// transient outage surfaces as a failed call rather than a dead handle.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    // == Constructor ==
    /// Connects to a Redis server.
    ///
    /// # Arguments
    /// * `url` - Redis connection URL (e.g., redis://localhost:6379)
    ///
    /// # Returns
    /// A connected store, or `StoreUnreachable` if the server cannot be
    /// reached.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(into_cache_error)?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(into_cache_error)?;

        info!(url = %url, "Connected to Redis");

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await.map_err(into_cache_error)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(into_cache_error)?;
        Ok(value)
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        let count: i64 = conn.incr(key, 1i64).await.map_err(into_cache_error)?;
        Ok(count)
    }

    async fn append_to_list(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.rpush(key, value).await.map_err(into_cache_error)?;
        Ok(())
    }

    async fn range_of_list(&self, key: &str, start: i64, end: i64) -> Result<Vec<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let items: Vec<Vec<u8>> = conn
            .lrange(key, start as isize, end as isize)
            .await
            .map_err(into_cache_error)?;
        Ok(items)
    }

    async fn flush(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(into_cache_error)?;
        debug!("redis store flushed");
        Ok(())
    }
}

// == Error Mapping ==
/// Maps a Redis error onto the crate's error type. WRONGTYPE replies keep
/// their meaning; everything else is a reachability problem.
fn into_cache_error(err: redis::RedisError) -> CacheError {
    if err.kind() == ErrorKind::TypeError {
        CacheError::WrongType(err.to_string())
    } else {
        CacheError::StoreUnreachable(err.to_string())
    }
}

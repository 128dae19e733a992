//! Redis distributed cache provider
//!
//! Distributed cache implementation using Redis as the backend. Shared by
//! every process instance pointing at the same server.
//!
//! ## Features
//!
//! - Native TTL through `SETEX`
//! - Dedicated `EXISTS` checks instead of fetching values
//! - Connection reuse through [`RedisConnectionManager`]
//!
//! ## Example
//!
//! ```ignore
//! use agenda_providers::cache::{RedisCacheProvider, RedisConnectionConfig, RedisConnectionManager};
//! use std::sync::Arc;
//!
//! let connections = Arc::new(RedisConnectionManager::new(RedisConnectionConfig::default()));
//! let provider = RedisCacheProvider::new(connections);
//! ```

use crate::cache::connection::RedisConnectionManager;
use crate::constants::REDIS_PROVIDER_NAME;
use agenda_domain::error::{Error, Result};
use agenda_domain::ports::{CacheEntryConfig, CacheProvider};
use agenda_domain::value_objects::CacheKind;
use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::sync::Arc;

/// Redis cache provider
///
/// Every call acquires the memoized connection from the manager, so a
/// connection lost mid-session is re-dialed by the next call.
#[derive(Clone)]
pub struct RedisCacheProvider {
    connections: Arc<RedisConnectionManager>,
}

impl RedisCacheProvider {
    /// Create a provider over a shared connection manager
    pub fn new(connections: Arc<RedisConnectionManager>) -> Self {
        Self { connections }
    }

    /// The connection manager backing this provider
    pub fn connections(&self) -> &Arc<RedisConnectionManager> {
        &self.connections
    }

    async fn connection(&self) -> Result<MultiplexedConnection> {
        self.connections
            .get_connection()
            .await
            .ok_or_else(|| Error::connection("Redis connection unavailable"))
    }

    /// Map a command failure, flagging dropped connections on the manager
    fn command_error(&self, command: &str, err: redis::RedisError) -> Error {
        if self.connections.report_error(&err) {
            Error::connection_with_source(format!("Redis {} failed", command), err)
        } else {
            Error::cache_with_source(format!("Redis {} failed", command), err)
        }
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| self.command_error("GET", e))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let ttl_seconds = config.validate()?.as_secs();
        let mut conn = self.connection().await?;

        let result: redis::RedisResult<()> = conn.set_ex(key, value, ttl_seconds).await;
        result.map_err(|e| self.command_error("SETEX", e))
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let deleted: redis::RedisResult<i64> = conn.del(key).await;
        deleted
            .map(|count| count > 0)
            .map_err(|e| self.command_error("DEL", e))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection().await?;

        let exists: redis::RedisResult<i64> = conn.exists(key).await;
        exists
            .map(|count| count > 0)
            .map_err(|e| self.command_error("EXISTS", e))
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.connection().await?;

        let flushed: redis::RedisResult<()> = redis::cmd("FLUSHDB").query_async(&mut conn).await;
        flushed.map_err(|e| self.command_error("FLUSHDB", e))
    }

    fn provider_name(&self) -> &str {
        REDIS_PROVIDER_NAME
    }

    fn kind(&self) -> CacheKind {
        CacheKind::Distributed
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("connections", &self.connections)
            .finish()
    }
}

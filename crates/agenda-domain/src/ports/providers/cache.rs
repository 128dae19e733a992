//! Cache Provider Port
//!
//! Port for cache backend providers. Both the distributed (Redis) and the
//! in-process backend implement it with identical semantics.
//!
//! The port is fallible on purpose: every method reports what went wrong so
//! the best-effort wrapper in the infrastructure layer can log it in one
//! place and substitute the benign default (miss, no-op, `false`).

use crate::error::{Error, Result};
use crate::value_objects::CacheKind;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// Every entry carries a finite TTL; there is no way to build a config
/// without one.
///
/// # Example
///
/// ```
/// use agenda_domain::ports::CacheEntryConfig;
///
/// let config = CacheEntryConfig::with_ttl_secs(300);
/// assert_eq!(config.ttl_secs(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Duration,
}

impl CacheEntryConfig {
    /// Create a config expiring after `ttl`
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Create a config expiring after `secs` seconds
    pub fn with_ttl_secs(secs: u64) -> Self {
        Self::with_ttl(Duration::from_secs(secs))
    }

    /// TTL in whole seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl.as_secs()
    }

    /// Reject TTLs that would store an already-expired entry
    pub fn validate(&self) -> Result<Duration> {
        if self.ttl.as_secs() == 0 {
            return Err(Error::invalid_argument(
                "Cache TTL must be at least one second",
            ));
        }
        Ok(self.ttl)
    }
}

/// Cache Provider Port
///
/// Raw JSON storage with mandatory TTL.
///
/// # Implementations
///
/// - **InMemory**: process-local expiring map with lazy expiry
/// - **Redis**: distributed store shared by all instances
///
/// # Example
///
/// ```ignore
/// use agenda_domain::ports::{CacheEntryConfig, CacheProvider};
///
/// cache.set_json("barbershops", &json, CacheEntryConfig::with_ttl_secs(3600)).await?;
///
/// if let Some(json) = cache.get_json("barbershops").await? {
///     let shops: Vec<Shop> = serde_json::from_str(&json)?;
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value as a JSON string
    ///
    /// # Returns
    /// The cached JSON string if present, None if not found or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store a JSON string, overwriting any prior value and resetting its expiry
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a value
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check whether a non-expired value is stored under `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remove every entry this provider manages
    ///
    /// For Redis this is the whole logical database, not a key prefix.
    async fn clear(&self) -> Result<()>;

    /// Get the name/identifier of this provider implementation (e.g. "redis", "memory")
    fn provider_name(&self) -> &str;

    /// Backend variant this provider represents
    fn kind(&self) -> CacheKind;
}

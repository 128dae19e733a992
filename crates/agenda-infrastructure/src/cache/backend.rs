//! Best-effort cache backend
//!
//! Wraps any [`CacheProvider`] and converts every failure into a log line
//! plus a benign default: a miss for reads, a dropped write for `set`,
//! `false` for `delete`/`exists`, a no-op for `clear`. Values are stored as
//! JSON.

use agenda_domain::error::{Error, Result};
use agenda_domain::ports::{CacheEntryConfig, CacheProvider};
use agenda_domain::value_objects::CacheKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed, never-failing view over a cache provider
#[derive(Clone)]
pub struct CacheBackend {
    provider: Arc<dyn CacheProvider>,
}

impl CacheBackend {
    /// Wrap a provider
    pub fn new<P: CacheProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Wrap an already shared provider
    pub fn from_arc(provider: Arc<dyn CacheProvider>) -> Self {
        Self { provider }
    }

    /// The wrapped provider
    pub fn as_provider(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.provider)
    }

    /// Backend variant of the wrapped provider
    pub fn kind(&self) -> CacheKind {
        self.provider.kind()
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Stored value, or `None` when absent, expired, or unreadable
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, provider = self.provider_name(), error = %e, "Cache get failed, treating as miss");
                None
            }
        }
    }

    /// Stored value, surfacing provider failures
    ///
    /// A payload that no longer deserializes into `T` is logged and reported
    /// as a miss so the caller overwrites it.
    pub async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(json) = self.provider.get_json(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, provider = self.provider_name(), error = %e, "Cached value could not be deserialized, treating as miss");
                Ok(None)
            }
        }
    }

    /// Store `value` for `ttl_secs` seconds; failures are logged and dropped
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl_secs: u64) {
        if let Err(e) = self.try_set(key, value, ttl_secs).await {
            warn!(key, ttl_secs, provider = self.provider_name(), error = %e, "Cache set failed, write dropped");
        }
    }

    async fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl_secs: u64) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|e| {
            Error::cache_with_source(format!("Failed to serialize value for {}", key), e)
        })?;
        self.provider
            .set_json(key, &json, CacheEntryConfig::with_ttl_secs(ttl_secs))
            .await?;
        debug!(key, ttl_secs, provider = self.provider_name(), "Cache set");
        Ok(())
    }

    /// Remove `key`; returns whether something was deleted
    pub async fn delete(&self, key: &str) -> bool {
        match self.provider.delete(key).await {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!(key, provider = self.provider_name(), error = %e, "Cache delete failed");
                false
            }
        }
    }

    /// Whether a non-expired value is stored under `key`
    pub async fn exists(&self, key: &str) -> bool {
        match self.provider.exists(key).await {
            Ok(exists) => exists,
            Err(e) => {
                warn!(key, provider = self.provider_name(), error = %e, "Cache exists check failed");
                false
            }
        }
    }

    /// Remove every entry the provider manages
    pub async fn clear(&self) {
        if let Err(e) = self.provider.clear().await {
            warn!(provider = self.provider_name(), error = %e, "Cache clear failed");
        }
    }
}

impl fmt::Debug for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBackend")
            .field("provider", &self.provider)
            .finish()
    }
}

//! In-process cache provider
//!
//! Process-local expiring map used when Redis is unavailable or disabled.
//! Entries are expired lazily on read; [`InMemoryCacheProvider::cleanup_expired`]
//! bounds memory held by entries nobody reads again and is meant to be called
//! periodically by the host.
//!
//! ## Example
//!
//! ```ignore
//! use agenda_providers::cache::InMemoryCacheProvider;
//!
//! let provider = InMemoryCacheProvider::new();
//! provider.set_json("services", "[]", CacheEntryConfig::with_ttl_secs(60)).await?;
//! ```

use crate::constants::IN_MEMORY_PROVIDER_NAME;
use crate::utils::{Clock, SystemClock};
use agenda_domain::error::{Error, Result};
use agenda_domain::ports::{CacheEntryConfig, CacheProvider};
use agenda_domain::value_objects::CacheKind;
use async_trait::async_trait;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Stored value with its absolute expiry
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Snapshot of the in-process map for diagnostics
///
/// Counts every stored entry, including expired ones not yet swept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InMemoryStats {
    /// Number of stored entries
    pub size: usize,
    /// Stored keys, sorted
    pub keys: Vec<String>,
}

/// In-process cache provider
///
/// Concurrent map from key to `{value, expires_at}`. Cheap to share behind an
/// `Arc`; offers no coherency across process instances.
pub struct InMemoryCacheProvider {
    entries: DashMap<String, CacheEntry>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCacheProvider {
    /// Create an empty provider on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty provider reading time from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Delete every expired entry, returning how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Entry count and key list
    pub fn stats(&self) -> InMemoryStats {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        InMemoryStats {
            size: keys.len(),
            keys,
        }
    }

    /// Number of stored entries, expired or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a live entry, deleting it first if it has expired
    fn live_value(&self, key: &str) -> Option<String> {
        let now = self.clock.now();
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        }
        None
    }
}

#[async_trait]
impl CacheProvider for InMemoryCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        Ok(self.live_value(key))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let ttl = config.validate()?;
        let expires_at = self
            .clock
            .now()
            .checked_add(ttl)
            .ok_or_else(|| {
                Error::invalid_argument(format!("Cache TTL of {}s is too large", ttl.as_secs()))
            })?;
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at,
        };
        self.entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.live_value(key).is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn provider_name(&self) -> &str {
        IN_MEMORY_PROVIDER_NAME
    }

    fn kind(&self) -> CacheKind {
        CacheKind::InProcess
    }
}

impl std::fmt::Debug for InMemoryCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCacheProvider")
            .field("entries", &self.entries.len())
            .field("clock", &self.clock)
            .finish()
    }
}

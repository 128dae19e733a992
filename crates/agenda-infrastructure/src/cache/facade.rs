//! Cache facade
//!
//! Selects one backend on first use and keeps it for the life of the facade:
//! the distributed backend when Redis answers, the in-process backend
//! otherwise. There is no later promotion back to Redis; a new facade (or
//! [`crate::cache::global::reset_global_cache`]) selects again.
//!
//! ## Example
//!
//! ```ignore
//! use agenda_infrastructure::cache::CacheFacade;
//! use agenda_infrastructure::config::CacheConfig;
//!
//! let facade = CacheFacade::new(CacheConfig::default());
//! let shops: Vec<Shop> = facade
//!     .with_cache("barbershops", || async { store.list_shops().await }, 3600)
//!     .await?;
//! ```

use crate::cache::backend::CacheBackend;
use crate::config::CacheConfig;
use crate::health::{CACHE_HEALTH_CHECK_NAME, HealthCheck};
use crate::logging::{log_backend_selected, log_cache_health};
use agenda_domain::ports::CacheProvider;
use agenda_domain::value_objects::{CacheInfo, CacheKind};
use agenda_providers::cache::{
    InMemoryCacheProvider, InMemoryStats, RedisCacheProvider, RedisConnectionConfig,
    RedisConnectionManager,
};
use agenda_providers::utils::{Clock, SystemClock};
use futures::future::join_all;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The backend chosen at first use
struct ActiveBackend {
    backend: CacheBackend,
    memory: Option<Arc<InMemoryCacheProvider>>,
}

impl ActiveBackend {
    fn in_process(memory: Arc<InMemoryCacheProvider>) -> Self {
        Self {
            backend: CacheBackend::from_arc(memory.clone()),
            memory: Some(memory),
        }
    }

    fn kind(&self) -> CacheKind {
        self.backend.kind()
    }
}

/// Read-through cache facade over the selected backend
pub struct CacheFacade {
    config: CacheConfig,
    connections: Arc<RedisConnectionManager>,
    clock: Arc<dyn Clock>,
    active: OnceCell<ActiveBackend>,
}

impl CacheFacade {
    /// Create a facade; the backend is selected on first use
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a facade whose in-process backend reads time from `clock`
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let connections = Arc::new(RedisConnectionManager::new(config.redis.clone()));
        Self {
            config,
            connections,
            clock,
            active: OnceCell::new(),
        }
    }

    /// Create a facade bound to an explicit provider, skipping selection
    ///
    /// Redis is treated as disabled for diagnostics and health.
    pub fn with_provider(provider: Arc<dyn CacheProvider>) -> Self {
        let config = CacheConfig {
            redis: RedisConnectionConfig::disabled(),
            ..CacheConfig::default()
        };
        let active = ActiveBackend {
            backend: CacheBackend::from_arc(provider),
            memory: None,
        };
        Self {
            connections: Arc::new(RedisConnectionManager::new(config.redis.clone())),
            config,
            clock: Arc::new(SystemClock),
            active: OnceCell::new_with(Some(active)),
        }
    }

    /// Facade configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Redis connection manager shared with the distributed backend
    pub fn connections(&self) -> &Arc<RedisConnectionManager> {
        &self.connections
    }

    /// Active backend, selecting it on first call
    pub async fn backend(&self) -> &CacheBackend {
        &self.active().await.backend
    }

    /// Variant of the active backend, selecting it on first call
    pub async fn kind(&self) -> CacheKind {
        self.active().await.kind()
    }

    async fn active(&self) -> &ActiveBackend {
        self.active.get_or_init(|| self.select()).await
    }

    async fn select(&self) -> ActiveBackend {
        let active = if self.connections.get_connection().await.is_some() {
            ActiveBackend {
                backend: CacheBackend::new(RedisCacheProvider::new(Arc::clone(&self.connections))),
                memory: None,
            }
        } else {
            ActiveBackend::in_process(Arc::new(InMemoryCacheProvider::with_clock(Arc::clone(
                &self.clock,
            ))))
        };
        log_backend_selected(
            active.kind(),
            &self.config.redis.redacted_url(),
            self.connections.is_disabled(),
        );
        active
    }

    /// Return the cached value for `key`, or fetch, cache, and return it
    ///
    /// A hit never invokes `fetcher`. On a miss the fetched value is stored
    /// for `ttl_secs` on a best-effort basis. If the lookup itself fails the
    /// fetched value is returned without being cached. Only the fetcher's
    /// own error is ever returned.
    pub async fn with_cache<T, E, F, Fut>(&self, key: &str, fetcher: F, ttl_secs: u64) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let backend = self.backend().await;

        match backend.try_get::<T>(key).await {
            Ok(Some(cached)) => {
                debug!(key, "Cache hit");
                return Ok(cached);
            }
            Ok(None) => debug!(key, "Cache miss"),
            Err(e) => {
                warn!(key, error = %e, "Cache lookup failed, fetching without cache");
                return fetcher().await;
            }
        }

        let data = fetcher().await?;
        backend.set(key, &data, ttl_secs).await;
        Ok(data)
    }

    /// Remove one cached value
    pub async fn invalidate_cache(&self, key: &str) {
        let deleted = self.backend().await.delete(key).await;
        debug!(key, deleted, "Cache invalidated");
    }

    /// Remove several cached values concurrently
    ///
    /// Each delete is independent; one failing does not stop the others.
    pub async fn invalidate_multiple_cache<I, S>(&self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let backend = self.backend().await;
        let keys: Vec<S> = keys.into_iter().collect();
        let deleted = join_all(keys.iter().map(|key| backend.delete(key.as_ref()))).await;
        debug!(
            requested = keys.len(),
            deleted = deleted.into_iter().filter(|d| *d).count(),
            "Cache keys invalidated"
        );
    }

    /// Snapshot of the active backend and its connectivity
    pub async fn get_cache_info(&self) -> CacheInfo {
        match self.kind().await {
            CacheKind::InProcess => CacheInfo::in_process(),
            CacheKind::Distributed => CacheInfo::distributed(self.connections.is_connected()),
        }
    }

    /// Remove every entry of the active backend
    ///
    /// For Redis this flushes the whole logical database.
    pub async fn clear_all_cache(&self) {
        let backend = self.backend().await;
        warn!(kind = %backend.kind(), "Clearing all cache entries");
        backend.clear().await;
    }

    /// Entry count and keys of the in-process backend, if it is active
    pub async fn memory_stats(&self) -> Option<InMemoryStats> {
        self.active().await.memory.as_ref().map(|memory| memory.stats())
    }

    /// Delete expired in-process entries now; returns how many were removed
    pub async fn cleanup_expired(&self) -> usize {
        self.active()
            .await
            .memory
            .as_ref()
            .map_or(0, |memory| memory.cleanup_expired())
    }

    /// Start the periodic expiry sweep when the in-process backend is active
    ///
    /// Returns `None` for the distributed backend, which expires entries
    /// itself. The task runs until aborted.
    pub async fn spawn_expired_sweep(&self) -> Option<JoinHandle<()>> {
        let memory = Arc::clone(self.active().await.memory.as_ref()?);
        let period = self.config.sweep_interval();

        info!(interval_secs = period.as_secs(), "Starting in-process cache sweep");
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = memory.cleanup_expired();
                if removed > 0 {
                    debug!(removed, "Swept expired cache entries");
                }
            }
        }))
    }

    /// Health of the cache layer
    pub async fn health_check(&self) -> HealthCheck {
        let started = Instant::now();

        let check = if self.connections.is_disabled() {
            HealthCheck::healthy(CACHE_HEALTH_CHECK_NAME)
        } else {
            match self.kind().await {
                CacheKind::Distributed if self.connections.ping().await => {
                    HealthCheck::healthy(CACHE_HEALTH_CHECK_NAME)
                }
                CacheKind::Distributed => HealthCheck::failed(
                    CACHE_HEALTH_CHECK_NAME,
                    Some("Redis did not answer PING".to_string()),
                ),
                CacheKind::InProcess => HealthCheck::degraded(
                    CACHE_HEALTH_CHECK_NAME,
                    Some("Redis unavailable, serving from in-process cache".to_string()),
                ),
            }
        };

        let kind = self.kind().await;
        log_cache_health(kind, &check);
        check
            .with_details(serde_json::json!({
                "kind": kind.as_str(),
                "redis_disabled": self.connections.is_disabled(),
            }))
            .with_response_time(started.elapsed())
    }
}

impl fmt::Debug for CacheFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheFacade")
            .field("connections", &self.connections)
            .field("selected", &self.active.get().map(ActiveBackend::kind))
            .finish()
    }
}

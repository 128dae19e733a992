//! Process-wide cache facade
//!
//! The facade is created lazily from [`ConfigLoader`] on first access. A
//! configuration that fails to load falls back to defaults with a warning so
//! caching never blocks the application.

use crate::cache::facade::CacheFacade;
use crate::config::{CacheConfig, ConfigLoader};
use agenda_domain::value_objects::CacheInfo;
use arc_swap::ArcSwap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::{Arc, LazyLock};
use tracing::warn;

static GLOBAL_CACHE: LazyLock<ArcSwap<CacheFacade>> =
    LazyLock::new(|| ArcSwap::from_pointee(CacheFacade::new(load_cache_config())));

fn load_cache_config() -> CacheConfig {
    match ConfigLoader::new().load() {
        Ok(config) => config.cache,
        Err(e) => {
            warn!(error = %e, "Failed to load cache configuration, using defaults");
            CacheConfig::default()
        }
    }
}

/// The process-wide facade
pub fn cache() -> Arc<CacheFacade> {
    GLOBAL_CACHE.load_full()
}

/// Replace the process-wide facade
///
/// Callers still holding the previous facade keep using it.
pub fn install(facade: CacheFacade) {
    GLOBAL_CACHE.store(Arc::new(facade));
}

/// Discard the process-wide facade so the next access selects a backend again
#[doc(hidden)]
pub fn reset_global_cache() {
    install(CacheFacade::new(load_cache_config()));
}

/// [`CacheFacade::with_cache`] on the process-wide facade
pub async fn with_cache<T, E, F, Fut>(key: &str, fetcher: F, ttl_secs: u64) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    cache().with_cache(key, fetcher, ttl_secs).await
}

/// [`CacheFacade::invalidate_cache`] on the process-wide facade
pub async fn invalidate_cache(key: &str) {
    cache().invalidate_cache(key).await;
}

/// [`CacheFacade::invalidate_multiple_cache`] on the process-wide facade
pub async fn invalidate_multiple_cache<I, S>(keys: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cache().invalidate_multiple_cache(keys).await;
}

/// [`CacheFacade::get_cache_info`] on the process-wide facade
pub async fn get_cache_info() -> CacheInfo {
    cache().get_cache_info().await
}

/// [`CacheFacade::clear_all_cache`] on the process-wide facade
pub async fn clear_all_cache() {
    cache().clear_all_cache().await;
}

/// [`CacheFacade::invalidate_barbershops_cache`] on the process-wide facade
pub async fn invalidate_barbershops_cache() {
    cache().invalidate_barbershops_cache().await;
}

/// [`CacheFacade::invalidate_services_cache`] on the process-wide facade
pub async fn invalidate_services_cache() {
    cache().invalidate_services_cache().await;
}

/// [`CacheFacade::invalidate_employees_cache`] on the process-wide facade
pub async fn invalidate_employees_cache() {
    cache().invalidate_employees_cache().await;
}

/// [`CacheFacade::invalidate_catalogs_cache`] on the process-wide facade
pub async fn invalidate_catalogs_cache() {
    cache().invalidate_catalogs_cache().await;
}

/// [`CacheFacade::invalidate_products_cache`] on the process-wide facade
pub async fn invalidate_products_cache() {
    cache().invalidate_products_cache().await;
}

/// [`CacheFacade::invalidate_users_cache`] on the process-wide facade
pub async fn invalidate_users_cache() {
    cache().invalidate_users_cache().await;
}

/// [`CacheFacade::invalidate_available_slots_cache`] on the process-wide facade
pub async fn invalidate_available_slots_cache(scope: Option<&str>) {
    cache().invalidate_available_slots_cache(scope).await;
}

/// [`CacheFacade::invalidate_bookings_cache`] on the process-wide facade
pub async fn invalidate_bookings_cache(scope: Option<&str>) {
    cache().invalidate_bookings_cache(scope).await;
}

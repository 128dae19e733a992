//! Cache Facade Tests

mod global_test;

use agenda_domain::error::{Error, Result};
use agenda_domain::ports::{CacheEntryConfig, CacheProvider};
use agenda_domain::value_objects::CacheKind;
use agenda_infrastructure::cache::CacheFacade;
use agenda_infrastructure::config::CacheConfig;
use agenda_providers::utils::ManualClock;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider whose every operation fails, counting calls
#[derive(Debug, Default)]
pub struct FailingCacheProvider {
    pub calls: AtomicUsize,
}

impl FailingCacheProvider {
    fn fail<T>(&self, op: &str) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::connection(format!("{} failed: injected", op)))
    }
}

#[async_trait]
impl CacheProvider for FailingCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        self.fail("get")
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        self.fail("set")
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        self.fail("delete")
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        self.fail("exists")
    }

    async fn clear(&self) -> Result<()> {
        self.fail("clear")
    }

    fn provider_name(&self) -> &str {
        "failing"
    }

    fn kind(&self) -> CacheKind {
        CacheKind::InProcess
    }
}

/// In-process facade on a manual clock
pub fn in_process_facade() -> (CacheFacade, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let facade = CacheFacade::with_clock(CacheConfig::in_process_only(), clock.clone());
    (facade, clock)
}

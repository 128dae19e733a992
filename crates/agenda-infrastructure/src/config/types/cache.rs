//! Cache configuration types

use crate::constants::CACHE_SWEEP_INTERVAL_SECS;
use agenda_providers::cache::RedisConnectionConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache facade configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Distributed backend connection settings
    pub redis: RedisConnectionConfig,

    /// Seconds between sweeps of expired in-process entries
    pub sweep_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis: RedisConnectionConfig::default(),
            sweep_interval_secs: CACHE_SWEEP_INTERVAL_SECS,
        }
    }
}

impl CacheConfig {
    /// Configuration that never touches Redis
    pub fn in_process_only() -> Self {
        Self {
            redis: RedisConnectionConfig::disabled(),
            ..Self::default()
        }
    }

    /// Configuration pointing at a Redis URL
    pub fn with_redis_url<S: Into<String>>(url: S) -> Self {
        Self {
            redis: RedisConnectionConfig::with_url(url),
            ..Self::default()
        }
    }

    /// Sweep interval as a duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

//! Main application configuration

use super::cache::CacheConfig;
use super::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Root configuration of the cache layer
///
/// Maps to `agenda.toml`:
///
/// ```toml
/// [cache]
/// sweep_interval_secs = 60
///
/// [cache.redis]
/// url = "redis://localhost:6379"
/// disabled = false
///
/// [logging]
/// level = "info"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache facade settings
    pub cache: CacheConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

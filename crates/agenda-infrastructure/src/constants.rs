//! Infrastructure layer constants
//!
//! Domain constants (default TTLs, key separators) are in
//! `agenda_domain::constants`; Redis defaults are in
//! `agenda_providers::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "agenda.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "agenda";

/// Environment variable prefix for configuration (`AGENDA__CACHE__REDIS__URL`)
pub const CONFIG_ENV_PREFIX: &str = "AGENDA";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional variable holding the Redis URL
pub const REDIS_URL_ENV: &str = "REDIS_URL";

/// Conventional variable forcing in-process-only caching
pub const REDIS_DISABLED_ENV: &str = "REDIS_DISABLED";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Interval between sweeps of expired in-process entries (1 minute)
pub const CACHE_SWEEP_INTERVAL_SECS: u64 = 60;

// ============================================================================
// HTTP CACHE CONSTANTS
// ============================================================================

/// Client/CDN max-age for successful responses when none is given (1 hour)
pub const HTTP_CACHE_DEFAULT_TTL_SECS: u64 = 3600;

/// Client/CDN max-age for error responses (1 minute)
pub const HTTP_CACHE_ERROR_TTL_SECS: u64 = 60;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "AGENDA_LOG";

/// Log file name stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "agenda";

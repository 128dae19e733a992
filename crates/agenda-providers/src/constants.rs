//! Provider constants

// ============================================================================
// REDIS CONSTANTS
// ============================================================================

/// Redis endpoint used when none is configured
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Retries after the initial dial before a connection attempt is abandoned
pub const REDIS_MAX_RECONNECT_ATTEMPTS: u32 = 10;

/// Backoff grows by this much per retry (milliseconds)
pub const REDIS_RECONNECT_STEP_MS: u64 = 50;

/// Upper bound for a single backoff delay (milliseconds)
pub const REDIS_MAX_RECONNECT_DELAY_MS: u64 = 500;

/// Timeout for one dial attempt (milliseconds)
pub const REDIS_CONNECT_TIMEOUT_MS: u64 = 2000;

/// After a failed dial, callers get "unavailable" without I/O for this long (milliseconds)
pub const REDIS_RECONNECT_COOLDOWN_MS: u64 = 5000;

/// Expected reply to `PING`
pub const REDIS_PING_REPLY: &str = "PONG";

// ============================================================================
// IN-PROCESS CACHE CONSTANTS
// ============================================================================

/// Provider name reported by the in-process backend
pub const IN_MEMORY_PROVIDER_NAME: &str = "memory";

/// Provider name reported by the distributed backend
pub const REDIS_PROVIDER_NAME: &str = "redis";

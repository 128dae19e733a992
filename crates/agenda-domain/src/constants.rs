//! Domain layer constants
//!
//! Cache key conventions and the default TTLs of the booking data domains.
//! Infrastructure-specific constants (Redis endpoint, backoff, config file
//! names) live in the provider and infrastructure crates.

// ============================================================================
// CACHE KEY CONSTANTS
// ============================================================================

/// Separator between a base key and its scope or parameter list
pub const CACHE_KEY_SEPARATOR: &str = ":";

/// Separator between `name:value` pairs in a composite key
pub const CACHE_PARAM_SEPARATOR: &str = "|";

/// Default TTL for cache entries when a caller has no domain-specific value (1 hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

// ============================================================================
// DOMAIN TTL CONSTANTS
// ============================================================================

/// Barbershop listings (1 hour)
pub const BARBERSHOPS_TTL_SECS: u64 = 3600;

/// Service catalog per shop (1 hour)
pub const SERVICES_TTL_SECS: u64 = 3600;

/// Employee rosters (30 minutes)
pub const EMPLOYEES_TTL_SECS: u64 = 1800;

/// Available booking slots change quickly (5 minutes)
pub const AVAILABLE_SLOTS_TTL_SECS: u64 = 300;

/// Product catalogs (1 hour)
pub const CATALOGS_TTL_SECS: u64 = 3600;

/// Products (1 hour)
pub const PRODUCTS_TTL_SECS: u64 = 3600;

/// System users (30 minutes)
pub const USERS_TTL_SECS: u64 = 1800;

/// Bookings (5 minutes)
pub const BOOKINGS_TTL_SECS: u64 = 300;

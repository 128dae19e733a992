//! # Agenda Cache
//!
//! Read-through cache for the booking application, backed by Redis when it is
//! reachable and by an in-process expiring map otherwise.
//!
//! This crate is the public API: it re-exports the domain types, the cache
//! backends and the process-wide facade.
//!
//! ## Features
//!
//! - **Read-through**: `with_cache` returns cached data or fetches and stores it
//! - **Automatic fallback**: an unreachable Redis never fails a request
//! - **Domain invalidation**: named helpers per data domain, scoped per shop
//! - **Diagnostics**: backend kind, connectivity and health checks
//!
//! ## Example
//!
//! ```ignore
//! use agenda_cache::{CacheDomain, get_cache_key, with_cache};
//!
//! let key = get_cache_key("services", &serde_json::json!({"shop": shop_id}));
//! let services = with_cache(&key, || store.services(shop_id), CacheDomain::Services.default_ttl()).await?;
//!
//! // after a booking changes a shop's agenda
//! agenda_cache::invalidate_available_slots_cache(Some(shop_id)).await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, cache domains, keys, the provider port
//! - `providers` - Redis and in-process backends, Redis connection manager
//! - `infrastructure` - Facade, configuration, logging, health, HTTP cache headers

/// Domain layer - errors, value objects and the provider port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use agenda_domain::*;
}

/// Provider layer - cache backend implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use agenda_providers::*;
}

/// Infrastructure layer - facade, config, logging and health
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use agenda_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the facade and its process-wide API at the crate root
pub use agenda_infrastructure::cache::global::{
    cache, clear_all_cache, get_cache_info, install, invalidate_available_slots_cache,
    invalidate_barbershops_cache, invalidate_bookings_cache, invalidate_cache,
    invalidate_catalogs_cache, invalidate_employees_cache, invalidate_multiple_cache,
    invalidate_products_cache, invalidate_services_cache, invalidate_users_cache, with_cache,
};
pub use agenda_infrastructure::cache::{CacheBackend, CacheFacade};
pub use agenda_infrastructure::config::{AppConfig, CacheConfig, ConfigLoader};
pub use agenda_infrastructure::logging::init_logging;

#[doc(hidden)]
pub use agenda_infrastructure::cache::global::reset_global_cache;

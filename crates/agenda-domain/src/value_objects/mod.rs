//! Domain Value Objects
//!
//! Immutable value objects describing cache keys, data domains and the
//! diagnostic view of the active backend.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CacheDomain`] | Fixed logical data domains of the booking application |
//! | [`DomainConfig`] | Base key and default TTL for one domain |
//! | [`CacheKey`] | Order-independent composite key builder |
//! | [`CacheKind`] | Which backend variant serves traffic |
//! | [`CacheInfo`] | Diagnostic snapshot of the active backend |

/// Backend kind and diagnostic snapshot
pub mod backend;
/// Composite cache key construction
pub mod cache_key;
/// Data domain key table
pub mod domain;

pub use backend::{CacheInfo, CacheKind};
pub use cache_key::{CacheKey, get_cache_key, scoped_key};
pub use domain::{CacheDomain, DomainConfig};

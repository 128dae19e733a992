//! Data domain key table
//!
//! The booking application caches a small fixed set of data domains. Each has
//! a base key and a default TTL; two of them are partitioned per resource id.

use crate::constants::*;
use crate::value_objects::cache_key::{get_cache_key, scoped_key};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static configuration of one cache domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainConfig {
    /// Base cache key
    pub base_key: &'static str,
    /// Default TTL in seconds
    pub default_ttl_secs: u64,
    /// Whether entries are partitioned per resource id (`base_key:scope`)
    pub scoped: bool,
}

/// Logical data domains cached by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheDomain {
    /// Barbershop listings
    Barbershops,
    /// Services offered by shops
    Services,
    /// Employee rosters
    Employees,
    /// Bookable time slots, scoped per shop or employee
    AvailableSlots,
    /// Product catalogs
    Catalogs,
    /// Products
    Products,
    /// System users
    Users,
    /// Bookings, scoped per shop
    Bookings,
}

impl CacheDomain {
    /// Every domain, in declaration order
    pub const ALL: [CacheDomain; 8] = [
        Self::Barbershops,
        Self::Services,
        Self::Employees,
        Self::AvailableSlots,
        Self::Catalogs,
        Self::Products,
        Self::Users,
        Self::Bookings,
    ];

    /// Static configuration of this domain
    pub const fn config(self) -> DomainConfig {
        match self {
            Self::Barbershops => DomainConfig {
                base_key: "barbershops",
                default_ttl_secs: BARBERSHOPS_TTL_SECS,
                scoped: false,
            },
            Self::Services => DomainConfig {
                base_key: "services",
                default_ttl_secs: SERVICES_TTL_SECS,
                scoped: false,
            },
            Self::Employees => DomainConfig {
                base_key: "employees",
                default_ttl_secs: EMPLOYEES_TTL_SECS,
                scoped: false,
            },
            Self::AvailableSlots => DomainConfig {
                base_key: "available_slots",
                default_ttl_secs: AVAILABLE_SLOTS_TTL_SECS,
                scoped: true,
            },
            Self::Catalogs => DomainConfig {
                base_key: "catalogs",
                default_ttl_secs: CATALOGS_TTL_SECS,
                scoped: false,
            },
            Self::Products => DomainConfig {
                base_key: "products",
                default_ttl_secs: PRODUCTS_TTL_SECS,
                scoped: false,
            },
            Self::Users => DomainConfig {
                base_key: "users",
                default_ttl_secs: USERS_TTL_SECS,
                scoped: false,
            },
            Self::Bookings => DomainConfig {
                base_key: "bookings",
                default_ttl_secs: BOOKINGS_TTL_SECS,
                scoped: true,
            },
        }
    }

    /// Base cache key of this domain
    pub const fn base_key(self) -> &'static str {
        self.config().base_key
    }

    /// Default TTL in seconds
    pub const fn default_ttl(self) -> u64 {
        self.config().default_ttl_secs
    }

    /// Key for this domain, `base_key:scope` when a scope is given
    pub fn scoped_key(self, scope: Option<&str>) -> String {
        match scope {
            Some(scope) => scoped_key(self.base_key(), scope),
            None => self.base_key().to_string(),
        }
    }

    /// Composite key for this domain with query parameters
    pub fn key<P: Serialize + ?Sized>(self, params: &P) -> String {
        get_cache_key(self.base_key(), params)
    }
}

impl fmt::Display for CacheDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_key())
    }
}

//! Named invalidation helpers per data domain
//!
//! Unscoped helpers delete the domain's base key. Scoped helpers delete
//! `base_key:scope` for the given resource id, or the base key when no scope
//! is given. Composite keys built with query parameters are not touched.

use crate::cache::facade::CacheFacade;
use agenda_domain::value_objects::CacheDomain;
use tracing::debug;

impl CacheFacade {
    /// Delete the key of `domain`, scoped to a resource id for scoped domains
    pub async fn invalidate_domain_cache(&self, domain: CacheDomain, scope: Option<&str>) {
        let key = if domain.config().scoped {
            domain.scoped_key(scope)
        } else {
            if scope.is_some() {
                debug!(%domain, "Domain is not scoped, ignoring scope");
            }
            domain.base_key().to_string()
        };
        self.invalidate_cache(&key).await;
    }

    /// Invalidate barbershop listings
    pub async fn invalidate_barbershops_cache(&self) {
        self.invalidate_domain_cache(CacheDomain::Barbershops, None)
            .await;
    }

    /// Invalidate services
    pub async fn invalidate_services_cache(&self) {
        self.invalidate_domain_cache(CacheDomain::Services, None).await;
    }

    /// Invalidate employee rosters
    pub async fn invalidate_employees_cache(&self) {
        self.invalidate_domain_cache(CacheDomain::Employees, None)
            .await;
    }

    /// Invalidate product catalogs
    pub async fn invalidate_catalogs_cache(&self) {
        self.invalidate_domain_cache(CacheDomain::Catalogs, None).await;
    }

    /// Invalidate products
    pub async fn invalidate_products_cache(&self) {
        self.invalidate_domain_cache(CacheDomain::Products, None).await;
    }

    /// Invalidate users
    pub async fn invalidate_users_cache(&self) {
        self.invalidate_domain_cache(CacheDomain::Users, None).await;
    }

    /// Invalidate available slots for one shop or employee
    pub async fn invalidate_available_slots_cache(&self, scope: Option<&str>) {
        self.invalidate_domain_cache(CacheDomain::AvailableSlots, scope)
            .await;
    }

    /// Invalidate bookings for one shop
    pub async fn invalidate_bookings_cache(&self, scope: Option<&str>) {
        self.invalidate_domain_cache(CacheDomain::Bookings, scope)
            .await;
    }
}

//! Unit tests for the cache domain key table

use agenda_domain::constants::*;
use agenda_domain::value_objects::{CacheDomain, CacheInfo, CacheKind};
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_domain_table_values() {
    assert_eq!(CacheDomain::Barbershops.base_key(), "barbershops");
    assert_eq!(CacheDomain::Barbershops.default_ttl(), 3600);
    assert_eq!(CacheDomain::Services.default_ttl(), 3600);
    assert_eq!(CacheDomain::Employees.default_ttl(), 1800);
    assert_eq!(CacheDomain::AvailableSlots.base_key(), "available_slots");
    assert_eq!(CacheDomain::AvailableSlots.default_ttl(), AVAILABLE_SLOTS_TTL_SECS);
    assert_eq!(CacheDomain::Catalogs.default_ttl(), 3600);
    assert_eq!(CacheDomain::Products.default_ttl(), 3600);
    assert_eq!(CacheDomain::Users.default_ttl(), USERS_TTL_SECS);
    assert_eq!(CacheDomain::Bookings.default_ttl(), BOOKINGS_TTL_SECS);
}

#[test]
fn test_base_keys_are_unique() {
    let keys: HashSet<_> = CacheDomain::ALL.iter().map(|d| d.base_key()).collect();
    assert_eq!(keys.len(), CacheDomain::ALL.len());
}

#[test]
fn test_every_domain_has_a_finite_ttl() {
    for domain in CacheDomain::ALL {
        assert!(domain.default_ttl() > 0, "{domain} has no TTL");
    }
}

#[test]
fn test_scoped_domains() {
    let scoped: Vec<_> = CacheDomain::ALL
        .into_iter()
        .filter(|d| d.config().scoped)
        .collect();
    assert_eq!(scoped, vec![CacheDomain::AvailableSlots, CacheDomain::Bookings]);
}

#[test]
fn test_scoped_key() {
    assert_eq!(
        CacheDomain::AvailableSlots.scoped_key(Some("shop-123")),
        "available_slots:shop-123"
    );
    assert_eq!(CacheDomain::AvailableSlots.scoped_key(None), "available_slots");
}

#[test]
fn test_domain_key_with_params() {
    assert_eq!(
        CacheDomain::Services.key(&json!({"shop": "s1"})),
        r#"services:shop:"s1""#
    );
    assert_eq!(CacheDomain::Services.key(&()), "services");
}

#[test]
fn test_cache_kind_display() {
    assert_eq!(CacheKind::Distributed.to_string(), "distributed");
    assert_eq!(CacheKind::InProcess.to_string(), "in_process");
    assert_eq!(
        serde_json::to_value(CacheKind::InProcess).unwrap(),
        json!("in_process")
    );
}

#[test]
fn test_cache_info_constructors() {
    let info = CacheInfo::in_process();
    assert_eq!(info.kind, CacheKind::InProcess);
    assert!(info.connected);
    assert!(info.distributed_connected.is_none());

    let info = CacheInfo::distributed(false);
    assert_eq!(info.kind, CacheKind::Distributed);
    assert!(!info.connected);
    assert_eq!(info.distributed_connected, Some(false));
}

#[test]
fn test_cache_info_omits_absent_distributed_status() {
    let value = serde_json::to_value(CacheInfo::in_process()).unwrap();
    assert_eq!(value, json!({"kind": "in_process", "connected": true}));
}

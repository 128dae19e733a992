//! In-Process Cache Provider Tests

use agenda_domain::Error;
use agenda_domain::ports::{CacheEntryConfig, CacheProvider};
use agenda_domain::value_objects::CacheKind;
use agenda_providers::cache::InMemoryCacheProvider;
use agenda_providers::utils::ManualClock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct TestValue {
    data: String,
    number: i32,
}

fn provider_with_clock() -> (InMemoryCacheProvider, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (InMemoryCacheProvider::with_clock(clock.clone()), clock)
}

#[tokio::test]
async fn test_memory_provider_basic_operations() {
    let provider = InMemoryCacheProvider::new();

    let value = TestValue {
        data: "test data".to_string(),
        number: 42,
    };

    let json = serde_json::to_string(&value).unwrap();
    provider
        .set_json("test_key", &json, CacheEntryConfig::with_ttl_secs(60))
        .await
        .unwrap();

    let retrieved_json = provider.get_json("test_key").await.unwrap();
    let retrieved: Option<TestValue> = retrieved_json.map(|j| serde_json::from_str(&j).unwrap());
    assert_eq!(retrieved, Some(value));

    assert!(provider.exists("test_key").await.unwrap());

    assert!(provider.delete("test_key").await.unwrap());
    assert!(!provider.exists("test_key").await.unwrap());
    assert!(provider.get_json("test_key").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_provider_nonexistent_key() {
    let provider = InMemoryCacheProvider::new();

    assert!(provider.get_json("nonexistent").await.unwrap().is_none());
    assert!(!provider.exists("nonexistent").await.unwrap());
    assert!(!provider.delete("nonexistent").await.unwrap());
}

#[tokio::test]
async fn test_memory_provider_overwrite_resets_expiry() {
    let (provider, clock) = provider_with_clock();

    provider
        .set_json("k", "\"first\"", CacheEntryConfig::with_ttl_secs(2))
        .await
        .unwrap();
    clock.advance(Duration::from_millis(1500));

    provider
        .set_json("k", "\"second\"", CacheEntryConfig::with_ttl_secs(2))
        .await
        .unwrap();
    clock.advance(Duration::from_millis(1500));

    assert_eq!(
        provider.get_json("k").await.unwrap().as_deref(),
        Some("\"second\"")
    );
}

#[tokio::test]
async fn test_memory_provider_lazy_expiry() {
    let (provider, clock) = provider_with_clock();

    provider
        .set_json("slot", "[1,2,3]", CacheEntryConfig::with_ttl_secs(1))
        .await
        .unwrap();
    assert!(provider.exists("slot").await.unwrap());

    clock.advance(Duration::from_millis(999));
    assert!(provider.get_json("slot").await.unwrap().is_some());

    clock.advance(Duration::from_millis(2));
    assert!(provider.get_json("slot").await.unwrap().is_none());
    assert!(!provider.exists("slot").await.unwrap());

    // The read removed the entry without a sweep
    assert_eq!(provider.len(), 0);
}

#[tokio::test]
async fn test_memory_provider_exists_removes_expired_entry() {
    let (provider, clock) = provider_with_clock();

    provider
        .set_json("k", "1", CacheEntryConfig::with_ttl_secs(1))
        .await
        .unwrap();
    clock.advance(Duration::from_secs(5));

    assert!(!provider.exists("k").await.unwrap());
    assert!(provider.is_empty());
}

#[tokio::test]
async fn test_memory_provider_cleanup_expired() {
    let (provider, clock) = provider_with_clock();

    provider
        .set_json("short", "1", CacheEntryConfig::with_ttl_secs(1))
        .await
        .unwrap();
    provider
        .set_json("long", "2", CacheEntryConfig::with_ttl_secs(60))
        .await
        .unwrap();

    assert_eq!(provider.cleanup_expired(), 0);

    clock.advance(Duration::from_secs(2));
    assert_eq!(provider.stats().size, 2);

    assert_eq!(provider.cleanup_expired(), 1);
    let stats = provider.stats();
    assert_eq!(stats.size, 1);
    assert_eq!(stats.keys, vec!["long".to_string()]);
}

#[tokio::test]
async fn test_memory_provider_stats_keys_sorted() {
    let provider = InMemoryCacheProvider::new();
    for key in ["services", "barbershops", "employees"] {
        provider
            .set_json(key, "[]", CacheEntryConfig::with_ttl_secs(60))
            .await
            .unwrap();
    }

    let stats = provider.stats();
    assert_eq!(stats.size, 3);
    assert_eq!(stats.keys, vec!["barbershops", "employees", "services"]);
}

#[tokio::test]
async fn test_memory_provider_clear() {
    let provider = InMemoryCacheProvider::new();

    provider
        .set_json("key1", "\"value1\"", CacheEntryConfig::with_ttl_secs(60))
        .await
        .unwrap();
    provider
        .set_json("key2", "\"value2\"", CacheEntryConfig::with_ttl_secs(60))
        .await
        .unwrap();
    assert_eq!(provider.len(), 2);

    provider.clear().await.unwrap();

    assert_eq!(provider.len(), 0);
    assert!(!provider.exists("key1").await.unwrap());
    assert!(!provider.exists("key2").await.unwrap());
}

#[tokio::test]
async fn test_memory_provider_rejects_zero_ttl() {
    let provider = InMemoryCacheProvider::new();

    let result = provider
        .set_json("k", "1", CacheEntryConfig::with_ttl_secs(0))
        .await;
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert!(provider.is_empty());
}

#[test]
fn test_memory_provider_identity() {
    let provider = InMemoryCacheProvider::new();
    assert_eq!(provider.provider_name(), "memory");
    assert_eq!(provider.kind(), CacheKind::InProcess);
}

#[tokio::test]
async fn test_memory_provider_rejects_ttl_past_clock_range() {
    let provider = InMemoryCacheProvider::new();

    let result = provider
        .set_json("barbershops", "[]", CacheEntryConfig::with_ttl_secs(u64::MAX))
        .await;

    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    assert!(!provider.exists("barbershops").await.unwrap());
}

#[test]
fn test_manual_clock_advance_saturates() {
    let clock = ManualClock::new();

    clock.advance(Duration::from_millis(5));
    clock.advance(Duration::MAX);
    assert_eq!(clock.elapsed(), Duration::from_millis(u64::MAX));

    clock.advance(Duration::from_millis(1));
    assert_eq!(clock.elapsed(), Duration::from_millis(u64::MAX));
}

//! Process-wide Facade Tests
//!
//! Every test installs its own facade, so they do not depend on the
//! environment's Redis configuration.

use agenda_domain::value_objects::{CacheInfo, CacheKind};
use agenda_infrastructure::cache::CacheFacade;
use agenda_infrastructure::cache::global;
use agenda_infrastructure::config::CacheConfig;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::Mutex;

// the global facade is shared by every test in this binary
static GLOBAL_LOCK: Mutex<()> = Mutex::const_new(());

#[tokio::test]
async fn test_global_facade_read_through_and_invalidate() {
    let _guard = GLOBAL_LOCK.lock().await;
    global::install(CacheFacade::new(CacheConfig::in_process_only()));

    let value = global::with_cache(
        "employees",
        || async { Ok::<_, Infallible>(vec!["emp-1".to_string()]) },
        1800,
    )
    .await
    .unwrap();
    assert_eq!(value, vec!["emp-1".to_string()]);
    assert!(global::cache().backend().await.exists("employees").await);

    global::invalidate_employees_cache().await;
    assert!(!global::cache().backend().await.exists("employees").await);

    assert_eq!(global::get_cache_info().await, CacheInfo::in_process());
}

#[tokio::test]
async fn test_global_accessor_returns_same_instance() {
    let _guard = GLOBAL_LOCK.lock().await;
    global::install(CacheFacade::new(CacheConfig::in_process_only()));

    assert!(Arc::ptr_eq(&global::cache(), &global::cache()));
}

#[tokio::test]
async fn test_install_replaces_selection() {
    let _guard = GLOBAL_LOCK.lock().await;
    global::install(CacheFacade::new(CacheConfig::in_process_only()));
    global::cache().backend().await.set("users", &"u-1", 60).await;

    global::install(CacheFacade::new(CacheConfig::in_process_only()));

    assert_eq!(global::get_cache_info().await.kind, CacheKind::InProcess);
    assert!(!global::cache().backend().await.exists("users").await);
}

#[tokio::test]
async fn test_global_clear_all_cache() {
    let _guard = GLOBAL_LOCK.lock().await;
    global::install(CacheFacade::new(CacheConfig::in_process_only()));
    let facade = global::cache();
    facade.backend().await.set("products", &1, 60).await;
    facade.backend().await.set("bookings:shop-1", &2, 60).await;

    global::invalidate_multiple_cache(["products"]).await;
    assert!(!facade.backend().await.exists("products").await);

    global::clear_all_cache().await;
    assert!(!facade.backend().await.exists("bookings:shop-1").await);
}

#[tokio::test]
async fn test_reset_global_cache_creates_fresh_facade() {
    let _guard = GLOBAL_LOCK.lock().await;
    global::install(CacheFacade::new(CacheConfig::in_process_only()));
    let before = global::cache();

    global::reset_global_cache();

    assert!(!Arc::ptr_eq(&before, &global::cache()));
    global::install(CacheFacade::new(CacheConfig::in_process_only()));
}

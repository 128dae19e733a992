//! Health Check Tests

use agenda_infrastructure::health::{HealthCheck, HealthStatus};
use std::time::Duration;

#[test]
fn test_health_status_classification() {
    assert!(HealthStatus::Up.is_healthy());
    assert!(HealthStatus::Up.is_operational());

    assert!(!HealthStatus::Degraded.is_healthy());
    assert!(HealthStatus::Degraded.is_operational());

    assert!(!HealthStatus::Down.is_healthy());
    assert!(!HealthStatus::Down.is_operational());
}

#[test]
fn test_health_check_constructors() {
    let up = HealthCheck::healthy("cache");
    assert_eq!(up.status, HealthStatus::Up);
    assert!(up.error.is_none());

    let down = HealthCheck::failed("cache", Some("no PONG".to_string()));
    assert_eq!(down.status, HealthStatus::Down);
    assert_eq!(down.error.as_deref(), Some("no PONG"));

    let degraded = HealthCheck::degraded("cache", Some("fallback".to_string()));
    assert_eq!(degraded.status, HealthStatus::Degraded);
}

#[test]
fn test_health_check_builders() {
    let check = HealthCheck::healthy("cache")
        .with_response_time(Duration::from_millis(12))
        .with_details(serde_json::json!({"kind": "in_process"}));

    assert_eq!(check.response_time_ms, 12);
    assert_eq!(check.details, Some(serde_json::json!({"kind": "in_process"})));
}

#[test]
fn test_health_status_serializes_lowercase() {
    let json = serde_json::to_string(&HealthStatus::Degraded).unwrap();
    assert_eq!(json, "\"degraded\"");
}

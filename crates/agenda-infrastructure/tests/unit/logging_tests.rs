//! Logging Tests

use agenda_domain::value_objects::CacheKind;
use agenda_infrastructure::health::HealthCheck;
use agenda_infrastructure::logging::{
    LoggingConfig, log_backend_selected, log_cache_health, parse_log_level,
};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

/// Writer collecting formatted events for assertions
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(emit: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, emit);
    logs.contents()
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_rejects_invalid_level_before_installing() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };

    assert!(agenda_infrastructure::logging::init_logging(config).is_err());
}

#[test]
fn test_backend_selection_names_kind_and_url() {
    let output = capture(|| {
        log_backend_selected(CacheKind::Distributed, "redis://***@cache:6379", false)
    });
    assert!(output.contains("Using distributed cache backend"));
    assert!(output.contains("kind=distributed"));
    assert!(output.contains("url=\"redis://***@cache:6379\""));

    let output = capture(|| log_backend_selected(CacheKind::InProcess, "redis://cache:6379", false));
    assert!(output.contains("WARN"));
    assert!(output.contains("Redis unreachable"));
    assert!(output.contains("kind=in_process"));

    let output = capture(|| log_backend_selected(CacheKind::InProcess, "redis://cache:6379", true));
    assert!(output.contains("Redis disabled"));
    assert!(!output.contains("redis://cache:6379"));
}

#[test]
fn test_cache_health_logs_reason_when_degraded() {
    let check = HealthCheck::degraded("cache", Some("Redis unavailable".to_string()));
    let output = capture(|| log_cache_health(CacheKind::InProcess, &check));
    assert!(output.contains("Cache degraded"));
    assert!(output.contains("Redis unavailable"));

    let check = HealthCheck::healthy("cache");
    let output = capture(|| log_cache_health(CacheKind::Distributed, &check));
    assert!(output.contains("Cache health check passed"));
}

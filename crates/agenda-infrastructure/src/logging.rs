//! Structured logging with tracing
//!
//! [`init_logging`] installs the process-wide subscriber: an `EnvFilter`
//! (overridable through `AGENDA_LOG`) over one formatter for stdout and, when
//! `file_output` is set, a second one writing to a daily-rolling file. Both
//! share the plain or JSON format chosen in [`LoggingConfig`].
//!
//! The `log_*` helpers emit the cache layer's lifecycle events with stable
//! field names (`kind`, `url`, `check`) so they can be queried from JSON logs.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use crate::health::{HealthCheck, HealthStatus};
use agenda_domain::error::{Error, Result};
use agenda_domain::value_objects::CacheKind;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

pub use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging with the provided configuration
///
/// Fails if the level is invalid or a global subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers = vec![format_layer(std::io::stdout, config.json_format, true)];
    if let Some(path) = &config.file_output {
        let appender = tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem().unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM)),
        );
        layers.push(format_layer(appender, config.json_format, false));
    }

    Registry::default()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    info!(
        level = %level,
        json = config.json_format,
        file = ?config.file_output,
        "Logging initialized"
    );
    Ok(())
}

fn format_layer<W>(writer: W, json: bool, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {}. Use trace, debug, info, warn, or error",
                level
            ),
            source: None,
        }),
    }
}

/// Log where configuration was read from
pub fn log_config_source(config_path: &Path, found: bool) {
    if found {
        info!(path = %config_path.display(), "Cache configuration loaded");
    } else {
        warn!(
            path = %config_path.display(),
            "Cache configuration file not found, using defaults and environment"
        );
    }
}

/// Log which backend a facade settled on
///
/// `redis_url` must already be redacted.
pub fn log_backend_selected(kind: CacheKind, redis_url: &str, redis_disabled: bool) {
    match kind {
        CacheKind::Distributed => {
            info!(kind = %kind, url = redis_url, "Using distributed cache backend");
        }
        CacheKind::InProcess if redis_disabled => {
            info!(kind = %kind, "Redis disabled, using in-process cache backend");
        }
        CacheKind::InProcess => {
            warn!(
                kind = %kind,
                url = redis_url,
                "Redis unreachable, using in-process cache backend"
            );
        }
    }
}

/// Log the outcome of a cache health check
pub fn log_cache_health(kind: CacheKind, check: &HealthCheck) {
    let reason = check.error.as_deref().unwrap_or("none");
    match check.status {
        HealthStatus::Up => {
            debug!(kind = %kind, check = %check.name, "Cache health check passed");
        }
        HealthStatus::Degraded => {
            warn!(kind = %kind, check = %check.name, reason, "Cache degraded");
        }
        HealthStatus::Down => {
            warn!(kind = %kind, check = %check.name, reason, "Cache health check failed");
        }
    }
}

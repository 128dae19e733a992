//! Redis connection manager
//!
//! Lazily dials Redis, memoizes the multiplexed connection, and reports
//! "unavailable" instead of failing when the server cannot be reached. Callers
//! treat `None` from [`RedisConnectionManager::get_connection`] as "operate
//! without the distributed backend".
//!
//! ## Reconnection
//!
//! The first dial is retried with a linear backoff capped at
//! `max_reconnect_delay_ms`, at most `max_reconnect_attempts` times after the
//! initial attempt. Command failures that indicate a dropped connection are
//! reported back through [`RedisConnectionManager::report_error`], which flips
//! the connected flag so the next caller re-dials with a single attempt.
//!
//! A failed dial starts a cooldown of `reconnect_cooldown_ms`. Until it ends,
//! `get_connection` answers `None` without touching the network, including
//! for callers that were queued behind the failing dial.

use crate::constants::*;
use agenda_domain::error::{Error, Result};
use redis::Client;
use redis::aio::MultiplexedConnection;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Redis connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConnectionConfig {
    /// Redis URL (`redis://[:password@]host:port[/db]`)
    pub url: String,

    /// Skip Redis entirely and run on the in-process cache
    pub disabled: bool,

    /// Retries after the initial dial
    pub max_reconnect_attempts: u32,

    /// Backoff increment per retry in milliseconds
    pub reconnect_step_ms: u64,

    /// Backoff cap in milliseconds
    pub max_reconnect_delay_ms: u64,

    /// Timeout for one dial attempt in milliseconds
    pub connect_timeout_ms: u64,

    /// Quiet period after a failed dial in milliseconds
    pub reconnect_cooldown_ms: u64,
}

impl Default for RedisConnectionConfig {
    fn default() -> Self {
        Self {
            url: REDIS_DEFAULT_URL.to_string(),
            disabled: false,
            max_reconnect_attempts: REDIS_MAX_RECONNECT_ATTEMPTS,
            reconnect_step_ms: REDIS_RECONNECT_STEP_MS,
            max_reconnect_delay_ms: REDIS_MAX_RECONNECT_DELAY_MS,
            connect_timeout_ms: REDIS_CONNECT_TIMEOUT_MS,
            reconnect_cooldown_ms: REDIS_RECONNECT_COOLDOWN_MS,
        }
    }
}

impl RedisConnectionConfig {
    /// Settings pointing at `url` with default backoff
    pub fn with_url<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Settings that never attempt a connection
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Backoff before retry number `retry` (1-based)
    pub fn reconnect_delay(&self, retry: u32) -> Duration {
        reconnect_delay(retry, self.reconnect_step_ms, self.max_reconnect_delay_ms)
    }

    /// URL with any password masked, safe for logs
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

/// Linear backoff: `min(retry * step, max)` milliseconds
pub fn reconnect_delay(retry: u32, step_ms: u64, max_ms: u64) -> Duration {
    Duration::from_millis((u64::from(retry).saturating_mul(step_ms)).min(max_ms))
}

fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

/// Lazily established, memoized Redis connection
pub struct RedisConnectionManager {
    config: RedisConnectionConfig,
    handle: Mutex<Option<MultiplexedConnection>>,
    connected: AtomicBool,
    /// Whether a connection was ever established; later dials do not back off
    established: AtomicBool,
    origin: Instant,
    /// Milliseconds since `origin` of the last failed dial, plus one; 0 = none
    failed_at_ms: AtomicU64,
}

impl RedisConnectionManager {
    /// Create a manager; no I/O happens until the first `get_connection`
    pub fn new(config: RedisConnectionConfig) -> Self {
        Self {
            config,
            handle: Mutex::new(None),
            connected: AtomicBool::new(false),
            established: AtomicBool::new(false),
            origin: Instant::now(),
            failed_at_ms: AtomicU64::new(0),
        }
    }

    /// Connection settings
    pub fn config(&self) -> &RedisConnectionConfig {
        &self.config
    }

    /// Whether Redis is switched off by configuration
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Return the live connection, dialing if there is none
    ///
    /// Never fails: an unreachable or disabled server yields `None`, and so
    /// does any call made during the cooldown after a failed dial.
    pub async fn get_connection(&self) -> Option<MultiplexedConnection> {
        if self.config.disabled {
            debug!("Redis disabled by configuration, using in-process cache");
            return None;
        }
        if self.is_cooling_down() {
            return None;
        }

        let mut slot = self.handle.lock().await;
        if let Some(conn) = slot.as_ref() {
            if self.is_connected() {
                return Some(conn.clone());
            }
            info!(url = %self.config.redacted_url(), "Reconnecting to Redis");
            *slot = None;
        }
        // a dial that failed while this caller waited for the lock decides for it
        if self.is_cooling_down() {
            return None;
        }

        let retries = if self.established.load(Ordering::SeqCst) {
            0
        } else {
            self.config.max_reconnect_attempts
        };

        match self.establish(retries).await {
            Ok(conn) => {
                info!(url = %self.config.redacted_url(), "Connected to Redis");
                self.connected.store(true, Ordering::SeqCst);
                self.established.store(true, Ordering::SeqCst);
                self.failed_at_ms.store(0, Ordering::SeqCst);
                *slot = Some(conn.clone());
                Some(conn)
            }
            Err(e) => {
                warn!(
                    url = %self.config.redacted_url(),
                    error = %e,
                    cooldown_ms = self.config.reconnect_cooldown_ms,
                    "Redis unavailable, continuing without distributed cache"
                );
                self.connected.store(false, Ordering::SeqCst);
                self.failed_at_ms
                    .store(self.elapsed_ms().saturating_add(1), Ordering::SeqCst);
                *slot = None;
                None
            }
        }
    }

    /// Whether a recent failed dial still suppresses new attempts
    pub fn is_cooling_down(&self) -> bool {
        match self.failed_at_ms.load(Ordering::SeqCst) {
            0 => false,
            failed_at => {
                self.elapsed_ms().saturating_add(1).saturating_sub(failed_at)
                    < self.config.reconnect_cooldown_ms
            }
        }
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Latest known connection status, no I/O
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Record that the connection was lost; the next caller re-dials
    pub fn mark_disconnected(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            warn!(url = %self.config.redacted_url(), "Redis connection lost");
        }
    }

    /// Inspect a command error and mark the connection lost if it was dropped
    ///
    /// Returns true when the error was classified as a connection failure.
    pub fn report_error(&self, err: &redis::RedisError) -> bool {
        let lost = err.is_io_error()
            || err.is_connection_dropped()
            || err.is_unrecoverable_error()
            || err.is_timeout();
        if lost {
            self.mark_disconnected();
        }
        lost
    }

    /// Close the connection, always leaving the manager disconnected
    pub async fn disconnect(&self) {
        let mut slot = self.handle.lock().await;
        if let Some(mut conn) = slot.take() {
            if self.is_connected() {
                let quit: redis::RedisResult<()> = redis::cmd("QUIT").query_async(&mut conn).await;
                match quit {
                    Ok(()) => info!("Disconnected from Redis"),
                    Err(e) => warn!(error = %e, "Error while closing Redis connection"),
                }
            }
        }
        self.connected.store(false, Ordering::SeqCst);
    }

    /// Liveness check: true only when the server answers `PONG`
    pub async fn ping(&self) -> bool {
        let Some(mut conn) = self.get_connection().await else {
            return false;
        };

        let reply: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        match reply {
            Ok(pong) if pong == REDIS_PING_REPLY => true,
            Ok(other) => {
                warn!(reply = %other, "Unexpected Redis PING reply");
                false
            }
            Err(e) => {
                self.report_error(&e);
                warn!(error = %e, "Redis PING failed");
                false
            }
        }
    }

    /// Dial, retrying up to `retries_allowed` times with bounded backoff
    async fn establish(&self, retries_allowed: u32) -> Result<MultiplexedConnection> {
        let client = Client::open(self.config.url.as_str())
            .map_err(|e| Error::connection_with_source("Invalid Redis URL", e))?;
        let timeout = Duration::from_millis(self.config.connect_timeout_ms);

        let mut retries = 0;
        loop {
            let attempt =
                tokio::time::timeout(timeout, client.get_multiplexed_async_connection()).await;
            let err = match attempt {
                Ok(Ok(conn)) => return Ok(conn),
                Ok(Err(e)) => Error::connection_with_source("Failed to connect to Redis", e),
                Err(elapsed) => Error::connection_with_source(
                    format!("Redis connection timed out after {}ms", timeout.as_millis()),
                    elapsed,
                ),
            };

            if retries >= retries_allowed {
                return Err(Error::connection(format!(
                    "Giving up on Redis after {} attempts: {}",
                    retries + 1,
                    err
                )));
            }

            retries += 1;
            let delay = self.config.reconnect_delay(retries);
            debug!(
                attempt = retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying Redis connection"
            );
            tokio::time::sleep(delay).await;
        }
    }
}

impl std::fmt::Debug for RedisConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisConnectionManager")
            .field("url", &self.config.redacted_url())
            .field("disabled", &self.config.disabled)
            .field("connected", &self.is_connected())
            .field("cooling_down", &self.is_cooling_down())
            .finish()
    }
}

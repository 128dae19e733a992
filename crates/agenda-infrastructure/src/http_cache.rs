//! HTTP response caching helpers
//!
//! Framework-agnostic header values for cacheable responses and a check for
//! whether a client's conditional request can be answered with `304`.

use crate::constants::{HTTP_CACHE_DEFAULT_TTL_SECS, HTTP_CACHE_ERROR_TTL_SECS};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

/// `Cache-Control` header name
pub const CACHE_CONTROL: &str = "Cache-Control";

/// `CDN-Cache-Control` header name
pub const CDN_CACHE_CONTROL: &str = "CDN-Cache-Control";

/// Cache headers for a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheControlHeaders {
    /// Value of `Cache-Control`
    pub cache_control: String,
    /// Value of `CDN-Cache-Control`
    pub cdn_cache_control: String,
}

impl CacheControlHeaders {
    /// Header name/value pairs, ready to copy onto a response
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (CACHE_CONTROL, self.cache_control.as_str()),
            (CDN_CACHE_CONTROL, self.cdn_cache_control.as_str()),
        ]
    }
}

impl Default for CacheControlHeaders {
    fn default() -> Self {
        cache_control_headers(HTTP_CACHE_DEFAULT_TTL_SECS)
    }
}

/// Public cache headers valid for `ttl_secs` in browsers and shared caches
pub fn cache_control_headers(ttl_secs: u64) -> CacheControlHeaders {
    CacheControlHeaders {
        cache_control: format!("public, max-age={}, s-maxage={}", ttl_secs, ttl_secs),
        cdn_cache_control: format!("max-age={}", ttl_secs),
    }
}

/// Cache headers for error responses, with the reduced error TTL
pub fn error_cache_control_headers() -> CacheControlHeaders {
    cache_control_headers(HTTP_CACHE_ERROR_TTL_SECS)
}

/// A JSON response body with its status and cache headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedResponse {
    /// HTTP status code
    pub status: u16,
    /// Cache headers to attach
    pub headers: CacheControlHeaders,
    /// JSON body
    pub body: Value,
}

impl CachedResponse {
    /// Successful cacheable response
    pub fn new<T: Serialize>(data: &T, ttl_secs: u64, status: u16) -> serde_json::Result<Self> {
        Ok(Self {
            status,
            headers: cache_control_headers(ttl_secs),
            body: serde_json::to_value(data)?,
        })
    }

    /// Error response `{"error": message}` cached for the error TTL
    pub fn error<S: AsRef<str>>(message: S, status: u16) -> Self {
        Self {
            status,
            headers: error_cache_control_headers(),
            body: json!({ "error": message.as_ref() }),
        }
    }
}

/// Whether the client's cached copy is still fresh
///
/// Only `If-Modified-Since` is evaluated; an `If-None-Match` alone never
/// validates. An unparseable date is treated as stale.
pub fn is_client_cache_valid(
    if_modified_since: Option<&str>,
    if_none_match: Option<&str>,
    max_age_secs: u64,
) -> bool {
    is_client_cache_valid_at(if_modified_since, if_none_match, max_age_secs, Utc::now())
}

/// [`is_client_cache_valid`] evaluated at `now`
pub fn is_client_cache_valid_at(
    if_modified_since: Option<&str>,
    if_none_match: Option<&str>,
    max_age_secs: u64,
    now: DateTime<Utc>,
) -> bool {
    let Some(since) = if_modified_since.filter(|v| !v.is_empty()) else {
        if let Some(tag) = if_none_match {
            debug!(etag = tag, "Entity tag validation unsupported, treating as stale");
        }
        return false;
    };

    let Ok(client_date) = DateTime::parse_from_rfc2822(since.trim()) else {
        return false;
    };

    let age_ms = now
        .signed_duration_since(client_date.with_timezone(&Utc))
        .num_milliseconds();
    i128::from(age_ms) < i128::from(max_age_secs) * 1000
}

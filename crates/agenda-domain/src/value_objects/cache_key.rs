//! Composite cache key construction
//!
//! Keys are `base` when there are no parameters, otherwise
//! `base:name1:value1|name2:value2` with parameters sorted by name and each
//! value rendered as compact JSON. Sorting makes the key independent of the
//! order in which callers supply parameters.

use crate::constants::{CACHE_KEY_SEPARATOR, CACHE_PARAM_SEPARATOR};
use serde::Serialize;
use serde_json::Value;

/// Build a composite cache key from a base key and a parameter object
///
/// `params` may be anything serializing to a JSON object (a struct, a map, or
/// `serde_json::json!({...})`). `()`, `None`, and empty objects return the
/// base key unchanged. A non-object value is appended as a single JSON segment.
///
/// # Example
///
/// ```
/// use agenda_domain::get_cache_key;
/// use serde_json::json;
///
/// let a = get_cache_key("services", &json!({"shop": "s-1", "active": true}));
/// let b = get_cache_key("services", &json!({"active": true, "shop": "s-1"}));
/// assert_eq!(a, b);
/// assert_eq!(a, r#"services:active:true|shop:"s-1""#);
/// assert_eq!(get_cache_key("services", &()), "services");
/// ```
pub fn get_cache_key<P: Serialize + ?Sized>(base_key: &str, params: &P) -> String {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => {
            let mut key = CacheKey::new(base_key);
            for (name, value) in map {
                key = key.param_value(name, value);
            }
            key.build()
        }
        Ok(Value::Null) | Err(_) => base_key.to_string(),
        Ok(other) => format!("{}{}{}", base_key, CACHE_KEY_SEPARATOR, other),
    }
}

/// Build a `base:scope` key for domains partitioned by a resource id
pub fn scoped_key(base_key: &str, scope: &str) -> String {
    format!("{}{}{}", base_key, CACHE_KEY_SEPARATOR, scope)
}

/// Incremental builder for composite cache keys
///
/// ```
/// use agenda_domain::value_objects::CacheKey;
///
/// let key = CacheKey::new("available_slots")
///     .param("employee", "e-7")
///     .param("date", "2024-05-01")
///     .build();
/// assert_eq!(key, r#"available_slots:date:"2024-05-01"|employee:"e-7""#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CacheKey {
    base: String,
    params: Vec<(String, Value)>,
}

impl CacheKey {
    /// Start a key from its base
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self {
            base: base.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter; values that cannot be represented as JSON become `null`
    pub fn param<K: Into<String>, V: Serialize>(self, name: K, value: V) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.param_value(name, value)
    }

    /// Add an already-converted JSON parameter
    pub fn param_value<K: Into<String>>(mut self, name: K, value: Value) -> Self {
        self.params.push((name.into(), value));
        self
    }

    /// Render the key
    pub fn build(mut self) -> String {
        if self.params.is_empty() {
            return self.base;
        }

        self.params.sort_by(|(a, _), (b, _)| a.cmp(b));

        let rendered = self
            .params
            .iter()
            .map(|(name, value)| format!("{}{}{}", name, CACHE_KEY_SEPARATOR, value))
            .collect::<Vec<_>>()
            .join(CACHE_PARAM_SEPARATOR);

        format!("{}{}{}", self.base, CACHE_KEY_SEPARATOR, rendered)
    }
}

//! # Agenda Cache - Domain Layer
//!
//! Core types for the booking application's cache layer. This crate has no
//! knowledge of Redis, tokio, or configuration files; it only defines the
//! contracts the other layers implement and the fixed domain key table.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type and `Result` alias shared by every crate |
//! | [`constants`] | Domain constants (default TTLs, key separators) |
//! | [`ports`] | `CacheProvider` port implemented by cache backends |
//! | [`value_objects`] | Cache domains, keys, backend kind, diagnostics |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::providers::CacheProvider;
pub use value_objects::{CacheDomain, CacheInfo, CacheKind, DomainConfig, get_cache_key};

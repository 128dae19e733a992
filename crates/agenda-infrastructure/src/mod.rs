//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the cache layer: backend selection,
//! the read-through facade, configuration, logging and health.
//!
//! ## Module Categories
//!
//! ### Caching
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Best-effort backend, facade, invalidation helpers, process-wide singleton |
//! | [`http_cache`] | `Cache-Control` headers and conditional request checks |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML/env configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`health`] | Health check results |
//! | [`logging`] | Structured logging with tracing |

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod health;
pub mod http_cache;
pub mod logging;

// Re-export commonly used types
pub use cache::{CacheBackend, CacheFacade};
pub use error_ext::ErrorContext;

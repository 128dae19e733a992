//! # Agenda Cache - Provider Implementations
//!
//! Cache backends implementing the `CacheProvider` port defined in
//! `agenda-domain`, plus the Redis connection manager they share.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | InMemory, Redis |
//!
//! ## Usage
//!
//! ```ignore
//! use agenda_providers::cache::{InMemoryCacheProvider, RedisConnectionManager};
//! ```

// Re-export agenda-domain types commonly used with providers
pub use agenda_domain::error::{Error, Result};
pub use agenda_domain::ports::{CacheEntryConfig, CacheProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache provider implementations
///
/// Implements `CacheProvider` for the distributed and in-process backends.
pub mod cache;

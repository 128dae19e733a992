//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InMemoryCacheProvider`] | Local | Expiring in-process map, fallback backend |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed for multi-instance |
//!
//! [`RedisConnectionManager`] owns the Redis connection lifecycle and is
//! shared between the Redis provider and health checks.

pub mod connection;
pub mod memory;
pub mod redis;

// Re-export for convenience
pub use connection::{RedisConnectionConfig, RedisConnectionManager, reconnect_delay};
pub use memory::{InMemoryCacheProvider, InMemoryStats};
pub use self::redis::RedisCacheProvider;

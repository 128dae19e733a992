//! Configuration management
//!
//! Typed configuration sections and the figment-based loader merging
//! defaults, an optional TOML file, and environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, CacheConfig, LoggingConfig};

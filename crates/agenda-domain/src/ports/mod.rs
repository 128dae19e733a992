//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the provider crate. Ports are defined
//! here so the infrastructure layer can depend on the contract instead of a
//! concrete backend.

/// External service provider ports
pub mod providers;

pub use providers::{CacheEntryConfig, CacheProvider};

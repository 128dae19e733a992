//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Raw JSON cache backend (Redis, in-process) |

/// Cache provider port
pub mod cache;

pub use cache::{CacheEntryConfig, CacheProvider};

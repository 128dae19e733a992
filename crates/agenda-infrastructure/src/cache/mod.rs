//! Cache facade
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`backend`] | Best-effort typed wrapper over a `CacheProvider` |
//! | [`facade`] | Backend selection, read-through `with_cache`, diagnostics |
//! | [`invalidation`] | Named invalidation helpers per data domain |
//! | [`global`] | Process-wide facade and free-function API |

pub mod backend;
pub mod facade;
pub mod global;
pub mod invalidation;

pub use backend::CacheBackend;
pub use facade::CacheFacade;

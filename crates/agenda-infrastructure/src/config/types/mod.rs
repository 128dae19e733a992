//! Configuration types module

pub mod app;
pub mod cache;
pub mod logging;

// Re-export main types
pub use app::*;
pub use cache::*;
pub use logging::*;

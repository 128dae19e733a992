//! Shared utilities for provider implementations

/// Time sources for expiry bookkeeping
pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

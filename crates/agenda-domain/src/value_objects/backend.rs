use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend variant selected to serve cache traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKind {
    /// Shared Redis store, coherent across process instances
    Distributed,
    /// Process-local expiring map, used when Redis is unavailable
    InProcess,
}

impl CacheKind {
    /// Stable identifier used in logs and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distributed => "distributed",
            Self::InProcess => "in_process",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic snapshot of the cache facade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    /// Selected backend variant
    pub kind: CacheKind,
    /// Whether the selected backend can currently serve traffic
    pub connected: bool,
    /// Live Redis connection status, present only when the distributed backend is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distributed_connected: Option<bool>,
}

impl CacheInfo {
    /// Snapshot for the in-process backend, which is always reachable
    pub fn in_process() -> Self {
        Self {
            kind: CacheKind::InProcess,
            connected: true,
            distributed_connected: None,
        }
    }

    /// Snapshot for the distributed backend with its live connection status
    pub fn distributed(connected: bool) -> Self {
        Self {
            kind: CacheKind::Distributed,
            connected,
            distributed_connected: Some(connected),
        }
    }
}

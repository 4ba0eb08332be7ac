#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable service identifier: the lowercase name with spaces turned into `-`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn from_name(name: &str) -> Self {
        Self(name.to_lowercase().replace(' ', "-"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServiceId").field(&self.0).finish()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
    Down,
}

/// One monitored service instance at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub status: ServiceStatus,
    /// Percent, always within `0..=100`.
    pub cpu: f64,
    /// Megabytes in use.
    pub memory: u32,
    /// Requests in the current observation window.
    pub requests: u64,
    /// Percent of failed requests, two decimals.
    pub error_rate: f64,
    /// Tail latency in milliseconds.
    pub p99: u32,
    pub last_heartbeat: DateTime<Utc>,
}

#![forbid(unsafe_code)]

use crate::model::{Alert, LogBuffer, Service};
use serde::{Deserialize, Serialize};

/// Everything a dashboard renders at one instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub services: Vec<Service>,
    /// Newest first.
    pub logs: LogBuffer,
    pub alerts: Vec<Alert>,
}

#![forbid(unsafe_code)]

use crate::model::ServiceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Active,
    Resolved,
}

/// An incident raised against one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub service_id: ServiceId,
    pub service_name: String,
    /// Free-text classification such as "High Latency".
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: AlertSeverity,
    pub timestamp: DateTime<Utc>,
    pub status: AlertStatus,
    pub message: String,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }

    pub fn resolve(&mut self) {
        self.status = AlertStatus::Resolved;
    }
}

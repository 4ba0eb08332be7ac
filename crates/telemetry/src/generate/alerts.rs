#![forbid(unsafe_code)]

use crate::model::{Alert, AlertSeverity, AlertStatus, ServiceId};
use chrono::{DateTime, TimeDelta, Utc};

/// Fixed incidents that exist before the session starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertSeeder;

impl AlertSeeder {
    pub fn seed(&self, now: DateTime<Utc>) -> Vec<Alert> {
        vec![
            Alert {
                id: "alt-1".into(),
                service_id: ServiceId::from_name("payment-gateway"),
                service_name: "payment-gateway".into(),
                kind: "High Latency".into(),
                severity: AlertSeverity::Critical,
                timestamp: now,
                status: AlertStatus::Active,
                message: "P99 latency exceeded 500ms for more than 5 minutes.".into(),
            },
            Alert {
                id: "alt-2".into(),
                service_id: ServiceId::from_name("inventory-manager"),
                service_name: "inventory-manager".into(),
                kind: "Memory Leak".into(),
                severity: AlertSeverity::Warning,
                timestamp: now - TimeDelta::minutes(30),
                status: AlertStatus::Active,
                message: "Memory usage increasing steadily without garbage collection.".into(),
            },
        ]
    }
}

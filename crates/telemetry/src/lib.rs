//! Synthetic telemetry for monitoring dashboards.
//!
//! Everything here is a pure data producer: a fixed [`Catalog`] of service
//! names seeds the generators, which draw from an injected random source
//! and a caller-provided "now". Nothing in this crate keeps a reference to
//! what it produced.
#![forbid(unsafe_code)]

pub mod catalog;
mod error;
pub mod generate;
pub mod model;
pub mod view;

pub use catalog::Catalog;
pub use error::Error;
pub use generate::{AlertSeeder, LogStreamGenerator, ServiceSnapshotGenerator};
pub use model::{
    Alert, AlertSeverity, AlertStatus, LogBuffer, LogEntry, LogId, LogLevel, MetricDataPoint,
    Service, ServiceId, ServiceStatus, SystemSnapshot, TrafficMetric, TrafficSample,
};

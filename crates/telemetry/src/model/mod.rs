#![forbid(unsafe_code)]

mod alert;
mod log;
mod metric;
mod service;
mod snapshot;

pub use alert::{Alert, AlertSeverity, AlertStatus};
pub use log::{LogBuffer, LogEntry, LogId, LogLevel, ParseLevelError};
pub use metric::{MetricDataPoint, TrafficMetric, TrafficSample};
pub use service::{Service, ServiceId, ServiceStatus};
pub use snapshot::SystemSnapshot;

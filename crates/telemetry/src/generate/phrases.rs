//! Message tables for synthetic log lines. Each level owns a disjoint set.

use crate::model::LogLevel;

pub const INFO: &[&str] = &[
    "User login successful",
    "Database connection established",
    "Message sent to queue",
    "Cache refreshed for key: user_profile",
    "Background job started: sync_orders",
];

pub const WARN: &[&str] = &[
    "Response time higher than average",
    "Disk space reaching threshold (85%)",
    "Slow query detected in payments DB",
    "Rate limit warning for IP 192.168.1.1",
];

pub const ERROR: &[&str] = &[
    "Unhandled rejection: connection timeout",
    "Failed to parse JSON payload",
    "External API returned 503 Service Unavailable",
    "Deadlock detected in transaction pool",
];

pub const DEBUG: &[&str] = &[
    "Payload chunk received",
    "Handshake initiated with node-04",
    "Metric flushed to collector",
];

pub fn for_level(level: LogLevel) -> &'static [&'static str] {
    match level {
        LogLevel::Info => INFO,
        LogLevel::Warn => WARN,
        LogLevel::Error => ERROR,
        LogLevel::Debug => DEBUG,
    }
}

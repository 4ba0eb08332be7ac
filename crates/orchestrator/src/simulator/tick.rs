//! State transitions applied by the simulator timers.
//!
//! Every function here maps the current value to the next one and draws
//! nothing but the randomness it is handed.
#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use rand::Rng;
use telemetry::{LogBuffer, LogEntry, LogStreamGenerator, Service};

pub const CPU_JITTER: f64 = 5.0;
pub const REQUEST_FACTOR_MIN: f64 = 0.95;
pub const REQUEST_FACTOR_MAX: f64 = 1.05;

/// Apply one jitter draw to a single service. Only `cpu` and `requests` move.
pub fn jitter_service(service: &Service, cpu_delta: f64, request_factor: f64) -> Service {
    Service {
        cpu: (service.cpu + cpu_delta).clamp(0.0, 100.0),
        requests: (service.requests as f64 * request_factor).floor() as u64,
        ..service.clone()
    }
}

/// Order-preserving map over the fleet with one fresh draw per service.
pub fn metrics_tick<R: Rng + ?Sized>(services: &[Service], rng: &mut R) -> Vec<Service> {
    services
        .iter()
        .map(|service| {
            let cpu_delta = rng.random_range(-CPU_JITTER..CPU_JITTER);
            let factor = rng.random_range(REQUEST_FACTOR_MIN..REQUEST_FACTOR_MAX);
            jitter_service(service, cpu_delta, factor)
        })
        .collect()
}

/// Prepend `entry` and keep the newest `logs.capacity()` lines.
pub fn log_tick(logs: &LogBuffer, entry: LogEntry) -> LogBuffer {
    let mut next = logs.clone();
    next.push_front(entry);
    next
}

/// A live-tail line: drawn level, fixed source and fixed message.
pub fn live_entry<R: Rng + ?Sized>(
    generator: &LogStreamGenerator<'_>,
    rng: &mut R,
    now: DateTime<Utc>,
    source: &str,
    message: &str,
) -> LogEntry {
    LogEntry {
        message: message.to_owned(),
        ..generator.generate_one(rng, now, source)
    }
}

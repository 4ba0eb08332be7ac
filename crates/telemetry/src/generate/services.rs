#![forbid(unsafe_code)]

use crate::Catalog;
use crate::model::{Service, ServiceId, ServiceStatus};
use chrono::{DateTime, Utc};
use rand::Rng;

/// A first draw above this marks the service down.
const DOWN_THRESHOLD: f64 = 0.9;
/// Otherwise a second, independent draw above this marks it degraded.
const DEGRADED_THRESHOLD: f64 = 0.8;

const CPU_RANGE: std::ops::Range<u32> = 0..100;
const MEMORY_MB_RANGE: std::ops::Range<u32> = 0..8192;
const REQUESTS_RANGE: std::ops::Range<u64> = 0..5000;
const P99_MS_RANGE: std::ops::Range<u32> = 50..250;
const ERROR_RATE_MAX: f64 = 2.0;
/// Largest two-decimal value strictly below `ERROR_RATE_MAX`.
const ERROR_RATE_CEIL: f64 = 1.99;

/// Produces one [`Service`] per catalog name, in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSnapshotGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ServiceSnapshotGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> Vec<Service> {
        self.catalog
            .names()
            .iter()
            .map(|name| Service {
                id: ServiceId::from_name(name),
                name: name.clone(),
                status: draw_status(rng),
                cpu: f64::from(rng.random_range(CPU_RANGE)),
                memory: rng.random_range(MEMORY_MB_RANGE),
                requests: rng.random_range(REQUESTS_RANGE),
                error_rate: draw_error_rate(rng),
                p99: rng.random_range(P99_MS_RANGE),
                last_heartbeat: now,
            })
            .collect()
    }
}

/// Nested draws: P(down) = 0.1, P(degraded) = 0.9 * 0.2 = 0.18, P(healthy) = 0.72.
/// The second draw only happens when the first one did not mark the service down.
pub(crate) fn draw_status<R: Rng + ?Sized>(rng: &mut R) -> ServiceStatus {
    if rng.random::<f64>() > DOWN_THRESHOLD {
        ServiceStatus::Down
    } else if rng.random::<f64>() > DEGRADED_THRESHOLD {
        ServiceStatus::Degraded
    } else {
        ServiceStatus::Healthy
    }
}

fn draw_error_rate<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = rng.random::<f64>() * ERROR_RATE_MAX;
    ((raw * 100.0).round() / 100.0).min(ERROR_RATE_CEIL)
}

#![forbid(unsafe_code)]

use crate::error::Error;
use crate::simulator::tick;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use telemetry::{Catalog, LogStreamGenerator, SystemSnapshot};

/// One periodic transformation of the snapshot, driven by its own timer.
pub trait TickRule: Send {
    fn name(&self) -> &'static str;

    fn period(&self) -> Duration;

    /// Compute the next snapshot from `current`, or `None` to leave it as is.
    fn apply(
        &mut self,
        current: &SystemSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Option<SystemSnapshot>, Error>;
}

/// Jitters cpu and request counts of every service.
#[derive(Debug)]
pub struct MetricsJitter {
    period: Duration,
    rng: StdRng,
}

impl MetricsJitter {
    pub fn new(period: Duration, rng: StdRng) -> Self {
        Self { period, rng }
    }
}

impl TickRule for MetricsJitter {
    fn name(&self) -> &'static str {
        "metrics"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn apply(
        &mut self,
        current: &SystemSnapshot,
        _now: DateTime<Utc>,
    ) -> Result<Option<SystemSnapshot>, Error> {
        if current.services.is_empty() {
            return Ok(None);
        }
        Ok(Some(SystemSnapshot {
            services: tick::metrics_tick(&current.services, &mut self.rng),
            ..current.clone()
        }))
    }
}

/// Appends one synthetic line to the log tail while enabled.
#[derive(Debug)]
pub struct LiveTail {
    period: Duration,
    source: String,
    message: String,
    catalog: Catalog,
    rng: StdRng,
    enabled: Arc<AtomicBool>,
}

impl LiveTail {
    pub fn new(
        config: &config::Simulator,
        catalog: Catalog,
        rng: StdRng,
        enabled: Arc<AtomicBool>,
    ) -> Self {
        Self {
            period: config.log_period,
            source: config.live_source.clone(),
            message: config.live_message.clone(),
            catalog,
            rng,
            enabled,
        }
    }
}

impl TickRule for LiveTail {
    fn name(&self) -> &'static str {
        "logs"
    }

    fn period(&self) -> Duration {
        self.period
    }

    fn apply(
        &mut self,
        current: &SystemSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Option<SystemSnapshot>, Error> {
        if !self.enabled.load(Ordering::Relaxed) {
            return Ok(None);
        }
        let generator = LogStreamGenerator::new(&self.catalog);
        let entry = tick::live_entry(&generator, &mut self.rng, now, &self.source, &self.message);
        Ok(Some(SystemSnapshot {
            logs: tick::log_tick(&current.logs, entry),
            ..current.clone()
        }))
    }
}

#![forbid(unsafe_code)]

use crate::Catalog;
use crate::generate::phrases;
use crate::model::{LogEntry, LogId, LogLevel};
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

/// Backlog timestamps fall within this many milliseconds before "now".
pub const BACKLOG_WINDOW_MS: i64 = 3_600_000;

/// Produces log lines with level-consistent messages.
#[derive(Debug, Clone, Copy)]
pub struct LogStreamGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> LogStreamGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// `count` entries spread over the last hour, newest first.
    pub fn generate_backlog<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
        count: usize,
    ) -> Vec<LogEntry> {
        let mut logs: Vec<LogEntry> = (0..count)
            .map(|_| {
                let offset = TimeDelta::milliseconds(rng.random_range(0..BACKLOG_WINDOW_MS));
                let service = self
                    .catalog
                    .names()
                    .choose(rng)
                    .cloned()
                    .unwrap_or_default();
                entry(rng, now - offset, service)
            })
            .collect();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        trace!(count, "log backlog generated");
        logs
    }

    /// A single entry stamped `now` and attributed to `service`.
    pub fn generate_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: DateTime<Utc>,
        service: &str,
    ) -> LogEntry {
        entry(rng, now, service.to_owned())
    }
}

fn entry<R: Rng + ?Sized>(rng: &mut R, timestamp: DateTime<Utc>, service: String) -> LogEntry {
    let level = *LogLevel::ALL.choose(rng).unwrap_or(&LogLevel::Info);
    let message = phrases::for_level(level)
        .choose(rng)
        .copied()
        .unwrap_or_default()
        .to_owned();
    LogEntry {
        id: LogId::from_random_bytes(rng.random()),
        timestamp,
        level,
        service,
        message,
        metadata: None,
    }
}

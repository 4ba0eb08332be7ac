//! Read-side projections the dashboard pages compute from a snapshot.
#![forbid(unsafe_code)]

use crate::model::{Alert, LogEntry, LogLevel, Service, ServiceStatus};
use itertools::Itertools;
use serde::Serialize;

/// Search box plus level selector of the log explorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    query: String,
    level: Option<LogLevel>,
}

impl LogFilter {
    pub fn new(query: impl AsRef<str>, level: Option<LogLevel>) -> Self {
        Self {
            query: query.as_ref().to_lowercase(),
            level,
        }
    }

    /// Case-insensitive substring match on message or service, then level.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        let matches_level = self.level.is_none_or(|level| entry.level == level);
        if !matches_level {
            return false;
        }
        self.query.is_empty()
            || entry.message.to_lowercase().contains(&self.query)
            || entry.service.to_lowercase().contains(&self.query)
    }

    /// Matching entries in their original order.
    pub fn apply<'a, I>(&self, logs: I) -> Vec<&'a LogEntry>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        logs.into_iter().filter(|entry| self.matches(entry)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub healthy: usize,
    pub degraded: usize,
    pub down: usize,
}

impl FleetSummary {
    pub fn of(services: &[Service]) -> Self {
        let counts = services.iter().map(|s| s.status).counts();
        let count = |status| counts.get(&status).copied().unwrap_or(0);
        Self {
            total: services.len(),
            healthy: count(ServiceStatus::Healthy),
            degraded: count(ServiceStatus::Degraded),
            down: count(ServiceStatus::Down),
        }
    }
}

/// The `n` services with the highest error rate, ties kept in fleet order.
pub fn top_by_error_rate(services: &[Service], n: usize) -> Vec<&Service> {
    services
        .iter()
        .sorted_by(|a, b| b.error_rate.total_cmp(&a.error_rate))
        .take(n)
        .collect()
}

pub fn active_alerts(alerts: &[Alert]) -> impl Iterator<Item = &Alert> {
    alerts.iter().filter(|alert| alert.is_active())
}

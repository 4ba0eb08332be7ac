#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDataPoint {
    pub time: String,
    pub value: f64,
}

/// Hourly fleet-wide traffic figures shown on the overview charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSample {
    /// Hour label, `"H:00"`.
    pub time: String,
    pub requests: u32,
    pub errors: u32,
    /// Milliseconds.
    pub latency: u32,
    /// Percent.
    pub cpu: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficMetric {
    Requests,
    Errors,
    Latency,
    Cpu,
}

impl TrafficSample {
    pub fn value(&self, metric: TrafficMetric) -> u32 {
        match metric {
            TrafficMetric::Requests => self.requests,
            TrafficMetric::Errors => self.errors,
            TrafficMetric::Latency => self.latency,
            TrafficMetric::Cpu => self.cpu,
        }
    }

    pub fn point(&self, metric: TrafficMetric) -> MetricDataPoint {
        MetricDataPoint {
            time: self.time.clone(),
            value: f64::from(self.value(metric)),
        }
    }
}

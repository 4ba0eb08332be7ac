#![forbid(unsafe_code)]

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Simulator {
    /// Period of the service metrics jitter, in milliseconds.
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub metrics_period: Duration,

    /// Period of the live log tail, in milliseconds.
    #[serde_as(as = "serde_with::DurationMilliSeconds<u64>")]
    pub log_period: Duration,

    /// Maximum number of log lines kept, newest first.
    pub log_capacity: usize,

    /// Service name stamped on live-tail entries.
    pub live_source: String,

    /// Message stamped on live-tail entries.
    pub live_message: String,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            metrics_period: Duration::from_millis(5000),
            log_period: Duration::from_millis(3000),
            log_capacity: 200,
            live_source: "api-gateway".into(),
            live_message: "Incoming request processing context established".into(),
        }
    }
}

impl Simulator {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.metrics_period.is_zero() {
            return Err(Error::Invalid {
                field: "simulator.metrics_period",
                reason: "period must be positive",
            });
        }
        if self.log_period.is_zero() {
            return Err(Error::Invalid {
                field: "simulator.log_period",
                reason: "period must be positive",
            });
        }
        if self.log_capacity == 0 {
            return Err(Error::Invalid {
                field: "simulator.log_capacity",
                reason: "capacity must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn positive_periods_validate(metrics in 1u64..600_000, logs in 1u64..600_000, cap in 1usize..10_000) {
            let section = Simulator {
                metrics_period: Duration::from_millis(metrics),
                log_period: Duration::from_millis(logs),
                log_capacity: cap,
                ..Simulator::default()
            };
            prop_assert!(section.validate().is_ok());
        }
    }

    #[test]
    fn zero_period_is_rejected() {
        let section = Simulator {
            metrics_period: Duration::ZERO,
            ..Simulator::default()
        };
        assert!(section.validate().is_err());
    }
}

#![forbid(unsafe_code)]

use crate::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Generator {
    /// Number of historical log lines generated at session start.
    pub backlog_size: usize,

    /// Fixed seed for the session entropy source. `None` seeds from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of hourly samples in the traffic series.
    pub series_points: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            backlog_size: 50,
            seed: None,
            series_points: 24,
        }
    }
}

impl Generator {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.series_points > 24 {
            return Err(Error::Invalid {
                field: "generator.series_points",
                reason: "at most one sample per hour of a day",
            });
        }
        Ok(())
    }
}

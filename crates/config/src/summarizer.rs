#![forbid(unsafe_code)]

use crate::Error;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Summarizer {
    /// Upper bound on log lines handed to a summarizer at once.
    pub max_logs: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self { max_logs: 20 }
    }
}

impl Summarizer {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_logs == 0 {
            return Err(Error::Invalid {
                field: "summarizer.max_logs",
                reason: "must allow at least one log line",
            });
        }
        Ok(())
    }
}

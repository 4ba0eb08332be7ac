#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::Instant;

/// Source of "now" for generated records and of the delay between ticks.
#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    /// Wall-clock time stamped on generated records.
    fn now(&self) -> DateTime<Utc>;
    /// Monotonic time the timers schedule against.
    fn instant(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default)]
pub struct SystemClock;

#[async_trait::async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

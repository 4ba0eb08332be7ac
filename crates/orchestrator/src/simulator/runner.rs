#![forbid(unsafe_code)]

use crate::clock::Clock;
use crate::entropy;
use crate::error::Error;
use crate::simulator::{LiveTail, MetricsJitter, SharedSnapshot, TickRule};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use telemetry::Catalog;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Runs each [`TickRule`] on its own timer against a [`SharedSnapshot`].
///
/// Ticks of one rule are applied by a single task, in order. Rules run
/// independently of each other. After [`stop`](Self::stop) returns no task
/// is left that could touch the snapshot; dropping the simulator cancels the
/// timers without waiting for them.
pub struct LiveUpdateSimulator {
    cancel: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
    live_tail: Arc<AtomicBool>,
}

impl LiveUpdateSimulator {
    /// Spawn the metrics and live-tail timers. Must run inside a tokio runtime.
    pub fn start(
        config: &config::Simulator,
        catalog: &Catalog,
        snapshot: SharedSnapshot,
        clock: Arc<dyn Clock>,
        rng: &mut StdRng,
    ) -> Self {
        let live_tail = Arc::new(AtomicBool::new(true));
        let rules: Vec<Box<dyn TickRule>> = vec![
            Box::new(MetricsJitter::new(
                config.metrics_period,
                entropy::fork(rng),
            )),
            Box::new(LiveTail::new(
                config,
                catalog.clone(),
                entropy::fork(rng),
                Arc::clone(&live_tail),
            )),
        ];
        Self::spawn(rules, snapshot, clock, live_tail)
    }

    /// Spawn arbitrary rules. Must run inside a tokio runtime.
    pub fn from_rules(
        rules: Vec<Box<dyn TickRule>>,
        snapshot: SharedSnapshot,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self::spawn(rules, snapshot, clock, Arc::new(AtomicBool::new(true)))
    }

    fn spawn(
        rules: Vec<Box<dyn TickRule>>,
        snapshot: SharedSnapshot,
        clock: Arc<dyn Clock>,
        live_tail: Arc<AtomicBool>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let tasks = rules
            .into_iter()
            .map(|rule| {
                tokio::spawn(drive(
                    rule,
                    snapshot.clone(),
                    Arc::clone(&clock),
                    cancel.child_token(),
                ))
            })
            .collect();
        info!("live updates started");
        Self {
            cancel,
            tasks,
            live_tail,
        }
    }

    /// Pause or resume the live log tail. Metrics keep ticking either way.
    pub fn set_live_tail(&self, enabled: bool) {
        self.live_tail.store(enabled, Ordering::Relaxed);
        debug!(enabled, "live tail toggled");
    }

    pub fn live_tail(&self) -> bool {
        self.live_tail.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Cancel every timer and wait until their tasks have exited.
    ///
    /// Every task is awaited even if one of them panicked; the first such
    /// failure is returned afterwards.
    pub async fn stop(&mut self) -> Result<(), Error> {
        self.cancel.cancel();
        let mut failure = None;
        for task in self.tasks.drain(..) {
            if let Err(err) = task.await {
                warn!(error = %err, "simulator task ended abnormally");
                failure.get_or_insert(err);
            }
        }
        info!("live updates stopped");
        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl Drop for LiveUpdateSimulator {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn drive(
    mut rule: Box<dyn TickRule>,
    snapshot: SharedSnapshot,
    clock: Arc<dyn Clock>,
    cancel: CancellationToken,
) {
    let name = rule.name();
    let period = rule.period();
    let mut ticks: u64 = 0;
    let mut deadline = clock.instant() + period;

    loop {
        let wait = deadline.saturating_duration_since(clock.instant());
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = clock.sleep(wait) => {}
        }

        ticks = ticks.saturating_add(1);
        let now = clock.now();
        match snapshot.update(|current| rule.apply(current, now)) {
            Ok(true) => trace!(rule = name, tick = ticks, "tick applied"),
            Ok(false) => trace!(rule = name, tick = ticks, "tick left snapshot unchanged"),
            Err(err) => warn!(rule = name, tick = ticks, error = %err, "tick failed, skipping"),
        }

        // Fixed rate; a missed deadline pushes the schedule back instead of bursting.
        deadline += period;
        let reached = clock.instant();
        if deadline <= reached {
            deadline = reached + period;
        }
    }

    debug!(rule = name, ticks, "timer cancelled");
}

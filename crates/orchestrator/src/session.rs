#![forbid(unsafe_code)]

use crate::clock::Clock;
use crate::entropy;
use crate::error::Error;
use crate::simulator::{LiveUpdateSimulator, SharedSnapshot};
use chrono::{DateTime, Utc};
use config::Config;
use rand::Rng;
use std::sync::Arc;
use telemetry::generate::traffic_series;
use telemetry::{
    AlertSeeder, Catalog, LogBuffer, LogStreamGenerator, ServiceSnapshotGenerator,
    SystemSnapshot, TrafficSample,
};
use tracing::info;

/// Build the snapshot a session starts from: fleet, log backlog and alerts.
pub fn initial_snapshot<R: Rng + ?Sized>(
    config: &Config,
    catalog: &Catalog,
    rng: &mut R,
    now: DateTime<Utc>,
) -> SystemSnapshot {
    let services = ServiceSnapshotGenerator::new(catalog).generate(rng, now);
    let backlog =
        LogStreamGenerator::new(catalog).generate_backlog(rng, now, config.generator.backlog_size);
    SystemSnapshot {
        services,
        logs: LogBuffer::from_newest_first(backlog, config.simulator.log_capacity),
        alerts: AlertSeeder.seed(now),
    }
}

/// One logged-in period: a snapshot plus the timers evolving it.
pub struct Session {
    id: u64,
    started_at: DateTime<Utc>,
    snapshot: SharedSnapshot,
    simulator: LiveUpdateSimulator,
    traffic: Vec<TrafficSample>,
}

impl Session {
    fn start(id: u64, config: &Config, catalog: &Catalog, clock: Arc<dyn Clock>) -> Self {
        let mut rng = entropy::session_rng(config.generator.seed);
        let started_at = clock.now();
        let snapshot = SharedSnapshot::new(initial_snapshot(config, catalog, &mut rng, started_at));
        let traffic = traffic_series(&mut rng, config.generator.series_points);
        let simulator = LiveUpdateSimulator::start(
            &config.simulator,
            catalog,
            snapshot.clone(),
            clock,
            &mut rng,
        );
        Self {
            id,
            started_at,
            snapshot,
            simulator,
            traffic,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The latest snapshot. Later ticks do not change the returned value.
    pub fn snapshot(&self) -> Arc<SystemSnapshot> {
        self.snapshot.load()
    }

    pub fn shared(&self) -> &SharedSnapshot {
        &self.snapshot
    }

    pub fn simulator(&self) -> &LiveUpdateSimulator {
        &self.simulator
    }

    pub fn traffic(&self) -> &[TrafficSample] {
        &self.traffic
    }

    async fn end(mut self) -> Result<(), Error> {
        self.simulator.stop().await?;
        info!(session = self.id, "session ended");
        Ok(())
    }
}

/// Owns at most one [`Session`]; a new login always retires the previous one
/// first so its timers cannot touch the fresh snapshot.
pub struct SessionManager {
    config: Config,
    catalog: Catalog,
    clock: Arc<dyn Clock>,
    current: Option<Session>,
    logins: u64,
}

impl SessionManager {
    pub fn new(config: Config, catalog: Catalog, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            catalog,
            clock,
            current: None,
            logins: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Stop any running session, then generate and start a new one.
    pub async fn login(&mut self) -> Result<&Session, Error> {
        self.logout().await?;

        self.logins = self.logins.saturating_add(1);
        let session = Session::start(
            self.logins,
            &self.config,
            &self.catalog,
            Arc::clone(&self.clock),
        );
        let snapshot = session.snapshot();
        info!(
            session = session.id(),
            services = snapshot.services.len(),
            logs = snapshot.logs.len(),
            alerts = snapshot.alerts.len(),
            "session started"
        );
        Ok(self.current.insert(session))
    }

    pub async fn logout(&mut self) -> Result<(), Error> {
        match self.current.take() {
            Some(session) => session.end().await,
            None => Ok(()),
        }
    }
}

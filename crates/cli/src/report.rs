use crate::error::Error;
use chrono::{DateTime, Utc};
use orchestrator::{LogAnalyst, Session};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use telemetry::view::{self, FleetSummary, LogFilter};
use telemetry::{LogEntry, LogLevel, SystemSnapshot, TrafficSample};
use tracing::{debug, info, warn};

/// Services listed in the "highest error rate" panel.
const TOP_SERVICES: usize = 4;

/// Log what the dashboard overview, alerts and log pages would show.
pub async fn report(session: &Session, filter: &LogFilter, analyst: &LogAnalyst) {
    let snapshot = session.snapshot();
    let summary = FleetSummary::of(&snapshot.services);
    info!(
        session = session.id(),
        total = summary.total,
        healthy = summary.healthy,
        degraded = summary.degraded,
        down = summary.down,
        "fleet status"
    );

    for service in view::top_by_error_rate(&snapshot.services, TOP_SERVICES) {
        info!(
            service = %service.name,
            status = ?service.status,
            error_rate = service.error_rate,
            cpu = format_args!("{:.1}", service.cpu),
            requests = service.requests,
            p99 = service.p99,
            "top error rate"
        );
    }

    for alert in view::active_alerts(&snapshot.alerts) {
        warn!(
            id = %alert.id,
            service = %alert.service_name,
            severity = ?alert.severity,
            kind = %alert.kind,
            "{}",
            alert.message
        );
    }

    let matched: Vec<LogEntry> = filter.apply(&snapshot.logs).into_iter().cloned().collect();
    info!(
        matched = matched.len(),
        total = snapshot.logs.len(),
        live_tail = session.simulator().live_tail(),
        "log lines"
    );
    if matched.is_empty() {
        return;
    }

    let digest = analyst.analyze(&matched).await;
    info!(%digest, "log analysis");

    if let Some(error) = matched.iter().find(|l| l.level == LogLevel::Error) {
        let explanation = analyst.explain(error).await;
        debug!(log = %error.id, %explanation, "latest error explained");
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dump<'a> {
    session: u64,
    started_at: DateTime<Utc>,
    summary: FleetSummary,
    snapshot: &'a SystemSnapshot,
    traffic: &'a [TrafficSample],
}

/// Write the session's current snapshot as pretty JSON.
pub fn dump(session: &Session, path: &Path) -> Result<(), Error> {
    let snapshot = session.snapshot();
    let document = Dump {
        session: session.id(),
        started_at: session.started_at(),
        summary: FleetSummary::of(&snapshot.services),
        snapshot: &snapshot,
        traffic: session.traffic(),
    };
    let file = File::create(path).map_err(|source| Error::DumpCreate {
        path: path.to_owned(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &document)?;
    info!(?path, "snapshot written");
    Ok(())
}

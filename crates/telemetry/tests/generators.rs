#![forbid(unsafe_code)]

use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use telemetry::generate::{BACKLOG_WINDOW_MS, phrases};
use telemetry::{
    AlertSeeder, AlertSeverity, AlertStatus, Catalog, LogStreamGenerator,
    ServiceSnapshotGenerator,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
}

proptest! {
    #[test]
    fn services_respect_metric_bounds(seed in any::<u64>()) {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let services = ServiceSnapshotGenerator::new(&catalog).generate(&mut rng, fixed_now());

        prop_assert_eq!(services.len(), catalog.len());
        for (service, name) in services.iter().zip(catalog.names()) {
            prop_assert_eq!(&service.name, name);
            prop_assert!((0.0..=100.0).contains(&service.cpu));
            prop_assert!(service.memory < 8192);
            prop_assert!(service.requests < 5000);
            prop_assert!((0.0..2.0).contains(&service.error_rate));
            prop_assert!((50..250).contains(&service.p99));
            prop_assert_eq!(service.last_heartbeat, fixed_now());
        }
        let ids: HashSet<_> = services.iter().map(|s| s.id.clone()).collect();
        prop_assert_eq!(ids.len(), services.len());
    }

    #[test]
    fn backlog_is_sorted_and_level_consistent(seed in any::<u64>(), count in 0usize..300) {
        let catalog = Catalog::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let now = fixed_now();
        let logs = LogStreamGenerator::new(&catalog).generate_backlog(&mut rng, now, count);

        prop_assert_eq!(logs.len(), count);
        for pair in logs.windows(2) {
            prop_assert!(pair[0].timestamp >= pair[1].timestamp);
        }
        for entry in &logs {
            prop_assert!(phrases::for_level(entry.level).contains(&entry.message.as_str()));
            prop_assert!(catalog.contains(&entry.service));
            prop_assert!(entry.timestamp <= now);
            prop_assert!(entry.timestamp > now - TimeDelta::milliseconds(BACKLOG_WINDOW_MS));
            prop_assert!(entry.metadata.is_none());
        }
    }
}

#[test]
fn identical_seeds_generate_identical_fleets() {
    let catalog = Catalog::new(["auth-service", "payment-gateway"]).unwrap();
    let generator = ServiceSnapshotGenerator::new(&catalog);

    let first = generator.generate(&mut StdRng::seed_from_u64(99), fixed_now());
    let second = generator.generate(&mut StdRng::seed_from_u64(99), fixed_now());

    assert_eq!(first, second);
    assert_eq!(first[0].id.as_str(), "auth-service");
    assert_eq!(first[1].id.as_str(), "payment-gateway");
}

#[test]
fn identical_seeds_generate_identical_backlogs() {
    let catalog = Catalog::default();
    let generator = LogStreamGenerator::new(&catalog);

    let first = generator.generate_backlog(&mut StdRng::seed_from_u64(5), fixed_now(), 50);
    let second = generator.generate_backlog(&mut StdRng::seed_from_u64(5), fixed_now(), 50);

    assert_eq!(first, second);
}

#[test]
fn generate_one_uses_caller_service_and_now() {
    let catalog = Catalog::default();
    let mut rng = StdRng::seed_from_u64(17);
    let entry = LogStreamGenerator::new(&catalog).generate_one(&mut rng, fixed_now(), "api-gateway");

    assert_eq!(entry.service, "api-gateway");
    assert_eq!(entry.timestamp, fixed_now());
    assert!(phrases::for_level(entry.level).contains(&entry.message.as_str()));
}

#[test]
fn seeded_alerts_are_fixed() {
    let now = fixed_now();
    let alerts = AlertSeeder.seed(now);

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[0].status, AlertStatus::Active);
    assert_eq!(alerts[0].service_name, "payment-gateway");
    assert_eq!(alerts[1].severity, AlertSeverity::Warning);
    assert_eq!(alerts[1].status, AlertStatus::Active);
    assert_eq!(alerts[1].service_name, "inventory-manager");
    assert_eq!(
        (alerts[0].timestamp - alerts[1].timestamp).num_milliseconds(),
        1_800_000
    );
    assert_eq!(telemetry::view::active_alerts(&alerts).count(), 2);
}

#[test]
fn resolved_alerts_leave_the_active_view() {
    let mut alerts = AlertSeeder.seed(fixed_now());
    alerts[0].resolve();

    let active: Vec<_> = telemetry::view::active_alerts(&alerts).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "alt-2");

    let json = serde_json::to_value(&alerts[0]).unwrap();
    assert_eq!(json["status"], "RESOLVED");
    assert_eq!(json["type"], "High Latency");
    assert_eq!(json["serviceId"], "payment-gateway");
}

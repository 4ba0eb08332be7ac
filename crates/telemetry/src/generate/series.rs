#![forbid(unsafe_code)]

use crate::model::TrafficSample;
use rand::Rng;

/// One sample per hour starting at `0:00`, at most 24.
pub fn traffic_series<R: Rng + ?Sized>(rng: &mut R, points: usize) -> Vec<TrafficSample> {
    (0..points.min(24))
        .map(|hour| TrafficSample {
            time: format!("{hour}:00"),
            requests: rng.random_range(500..1500),
            errors: rng.random_range(0..50),
            latency: rng.random_range(40..140),
            cpu: rng.random_range(20..60),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TrafficMetric;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_chart_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        let series = traffic_series(&mut rng, 24);
        assert_eq!(series.len(), 24);
        assert_eq!(series[0].time, "0:00");
        assert_eq!(series[23].time, "23:00");
        for sample in &series {
            assert!((500..1500).contains(&sample.requests));
            assert!(sample.errors < 50);
            assert!((40..140).contains(&sample.latency));
            assert!((20..60).contains(&sample.cpu));
        }
        let latency = series[5].point(TrafficMetric::Latency);
        assert_eq!(latency.time, "5:00");
        assert_eq!(latency.value, f64::from(series[5].latency));
    }

    #[test]
    fn caps_at_one_day() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(traffic_series(&mut rng, 100).len(), 24);
    }
}

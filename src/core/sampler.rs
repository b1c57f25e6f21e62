use crate::core::ballistics::{
    FlightMetrics, InitialConditions, KinematicsEngine, VelocityComponents,
};

const MIN_SAMPLES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Evenly spaced samples of a flight over `[0, flight_time_s]`.
///
/// Positions are computed on demand. Cloning restarts the sequence from
/// wherever the clone was taken, and two sequences built from the same inputs
/// yield identical points.
#[derive(Clone, Debug)]
pub struct TrajectorySamples {
    engine: KinematicsEngine,
    conditions: InitialConditions,
    velocity: VelocityComponents,
    flight_time_s: f64,
    count: usize,
    next: usize,
}

/// Samples `step_count` points of the flight, raising counts below 2 to 2.
/// A flight with zero duration yields a single point at `t = 0`.
pub fn sample(
    engine: &KinematicsEngine,
    conditions: &InitialConditions,
    metrics: &FlightMetrics,
    velocity: VelocityComponents,
    step_count: usize,
) -> TrajectorySamples {
    let count = if metrics.flight_time_s > 0.0 {
        step_count.max(MIN_SAMPLES)
    } else {
        1
    };

    TrajectorySamples {
        engine: *engine,
        conditions: *conditions,
        velocity,
        flight_time_s: metrics.flight_time_s.max(0.0),
        count,
        next: 0,
    }
}

impl TrajectorySamples {
    fn time_at(&self, index: usize) -> f64 {
        if index + 1 >= self.count {
            // Land exactly on the flight time instead of an accumulated value.
            if self.count == 1 { 0.0 } else { self.flight_time_s }
        } else {
            (index as f64 * self.flight_time_s) / (self.count - 1) as f64
        }
    }
}

impl Iterator for TrajectorySamples {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let time_s = self.time_at(self.next);
        self.next += 1;

        let (x_m, y_m) = self
            .engine
            .position_at(&self.conditions, self.velocity, time_s);
        Some(TrajectoryPoint { time_s, x_m, y_m })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrajectorySamples {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn sampled(
        height: f64,
        speed: f64,
        angle: f64,
        steps: usize,
    ) -> (FlightMetrics, Vec<TrajectoryPoint>) {
        let engine = KinematicsEngine::default();
        let conditions = InitialConditions::new(height, speed, angle).expect("valid conditions");
        let metrics = engine
            .compute_flight_metrics(&conditions)
            .expect("calculation should succeed");
        let points = sample(&engine, &conditions, &metrics, conditions.velocity(), steps).collect();
        (metrics, points)
    }

    #[test]
    fn starts_at_launch_point_and_ends_at_flight_time() {
        for &steps in &[2, 3, 10, 100, 257] {
            let (metrics, points) = sampled(1.5, 30.0, 45.0, steps);

            assert_eq!(points.len(), steps);
            let first = points[0];
            assert_eq!(first.time_s, 0.0);
            assert_eq!(first.x_m, 0.0);
            assert_eq!(first.y_m, 1.5);

            let last = points[points.len() - 1];
            assert_eq!(last.time_s, metrics.flight_time_s);
            assert_close(last.x_m, metrics.total_range_m, 1e-9);
            assert_close(last.y_m, 0.0, 1e-9);
        }
    }

    #[test]
    fn times_are_strictly_increasing() {
        let (_, points) = sampled(0.0, 10.0, 45.0, 100);
        for pair in points.windows(2) {
            assert!(pair[0].time_s < pair[1].time_s, "{pair:?}");
        }
    }

    #[test]
    fn small_step_counts_are_raised_to_two() {
        for steps in [0, 1] {
            let (metrics, points) = sampled(0.0, 10.0, 45.0, steps);
            assert_eq!(points.len(), 2);
            assert_eq!(points[1].time_s, metrics.flight_time_s);
        }
    }

    #[test]
    fn zero_flight_time_yields_a_single_point() {
        let (_, points) = sampled(0.0, 0.0, 45.0, 100);
        assert_eq!(
            points,
            vec![TrajectoryPoint {
                time_s: 0.0,
                x_m: 0.0,
                y_m: 0.0
            }]
        );
    }

    #[test]
    fn rises_then_falls_when_launched_upward() {
        let (_, points) = sampled(2.0, 25.0, 60.0, 200);
        let heights: Vec<f64> = points.iter().map(|p| p.y_m).collect();
        let apex = heights
            .iter()
            .enumerate()
            .fold(0, |best, (i, &y)| if y > heights[best] { i } else { best });

        assert!(apex > 0 && apex < heights.len() - 1);
        assert!(heights[..=apex].windows(2).all(|w| w[0] < w[1]));
        assert!(heights[apex..].windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn strictly_falls_when_not_launched_upward() {
        for angle in [0.0, -20.0] {
            let (_, points) = sampled(40.0, 12.0, angle, 150);
            assert!(points.windows(2).all(|w| w[0].y_m > w[1].y_m));
        }
    }

    #[test]
    fn regenerating_yields_identical_sequence() {
        let engine = KinematicsEngine::default();
        let conditions = InitialConditions::new(3.0, 17.0, 33.0).expect("valid conditions");
        let metrics = engine
            .compute_flight_metrics(&conditions)
            .expect("calculation should succeed");
        let samples = sample(&engine, &conditions, &metrics, conditions.velocity(), 64);

        let replay = samples.clone();
        assert_eq!(samples.len(), 64);
        assert_eq!(samples.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }
}

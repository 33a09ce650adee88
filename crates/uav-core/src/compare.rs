//! Side-by-side comparison of two scenario results.

use crate::cost::FlightMetrics;
use serde::{Deserialize, Serialize};

/// Percentage change from baseline to candidate, per metric.
///
/// A field is `None` when the baseline value is zero, since the relative
/// change is undefined there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsDelta {
    pub distance_pct: Option<f64>,
    pub time_pct: Option<f64>,
    pub battery_pct: Option<f64>,
}

impl MetricsDelta {
    /// True when every defined field is zero.
    pub fn is_unchanged(&self) -> bool {
        [self.distance_pct, self.time_pct, self.battery_pct]
            .iter()
            .flatten()
            .all(|pct| *pct == 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Comparison {
    Compared(MetricsDelta),
    /// At least one side found no path, so nothing was compared.
    Unavailable {
        baseline_missing: bool,
        candidate_missing: bool,
    },
}

/// Compare two optional results.
pub fn compare(baseline: Option<&FlightMetrics>, candidate: Option<&FlightMetrics>) -> Comparison {
    match (baseline, candidate) {
        (Some(base), Some(cand)) => Comparison::Compared(MetricsDelta {
            distance_pct: percent_change(base.distance as f64, cand.distance as f64),
            time_pct: percent_change(base.time_s, cand.time_s),
            battery_pct: percent_change(base.battery_consumed, cand.battery_consumed),
        }),
        _ => Comparison::Unavailable {
            baseline_missing: baseline.is_none(),
            candidate_missing: candidate.is_none(),
        },
    }
}

fn percent_change(baseline: f64, candidate: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    Some((candidate - baseline) / baseline * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::compute_metrics;
    use crate::graph::FlightGraph;
    use crate::grid::{Coordinate, GridMap};
    use crate::pathfinder::shortest_path;
    use crate::traversal::TraversalRule;

    fn metrics(goal: Coordinate, speed: f64, altitude: f64) -> FlightMetrics {
        let grid = GridMap::filled(6, 6, 0).unwrap();
        let graph = FlightGraph::build(&grid, TraversalRule::Flat, 0.0);
        let path = shortest_path(&graph, Coordinate::new(0, 0), goal).unwrap();
        compute_metrics(path, speed, altitude).unwrap()
    }

    #[test]
    fn percentage_differences() {
        let base = metrics(Coordinate::new(0, 4), 2.0, 0.0);
        let cand = metrics(Coordinate::new(1, 4), 2.0, 0.0);
        let Comparison::Compared(delta) = compare(Some(&base), Some(&cand)) else {
            panic!("expected comparison");
        };
        assert!((delta.distance_pct.unwrap() - 25.0).abs() < 1e-9);
        assert!((delta.time_pct.unwrap() - 25.0).abs() < 1e-9);
        assert!((delta.battery_pct.unwrap() - 25.0).abs() < 1e-9);
        assert!(!delta.is_unchanged());
    }

    #[test]
    fn identical_results_are_unchanged() {
        let base = metrics(Coordinate::new(3, 3), 2.0, 6.0);
        match compare(Some(&base), Some(&base)) {
            Comparison::Compared(delta) => assert!(delta.is_unchanged()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_side_is_not_a_zero_difference() {
        let base = metrics(Coordinate::new(3, 3), 2.0, 6.0);
        assert_eq!(
            compare(Some(&base), None),
            Comparison::Unavailable {
                baseline_missing: false,
                candidate_missing: true
            }
        );
        assert_eq!(
            compare(None, None),
            Comparison::Unavailable {
                baseline_missing: true,
                candidate_missing: true
            }
        );
    }

    #[test]
    fn zero_baseline_leaves_fields_undefined() {
        let base = metrics(Coordinate::new(0, 0), 2.0, 0.0);
        let cand = metrics(Coordinate::new(0, 2), 2.0, 0.0);
        let Comparison::Compared(delta) = compare(Some(&base), Some(&cand)) else {
            panic!("expected comparison");
        };
        assert_eq!(delta.distance_pct, None);
        assert_eq!(delta.battery_pct, None);
    }
}

//! Scenario runner: graph construction, search and cost model in one call.

use crate::config::ScenarioConfig;
use crate::cost::{compute_metrics, flight_time, FlightMetrics};
use crate::error::Result;
use crate::graph::FlightGraph;
use crate::grid::{Coordinate, GridMap};
use crate::pathfinder::search;
use crate::traversal::TraversalRule;
use serde::{Deserialize, Serialize};

/// A named planning request against some grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub rule: TraversalRule,
    pub start: Coordinate,
    pub goal: Coordinate,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        rule: TraversalRule,
        start: Coordinate,
        goal: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            rule,
            start,
            goal,
        }
    }
}

/// Result of a run. "No path" is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "metrics", rename_all = "snake_case")]
pub enum ScenarioOutcome {
    Completed(FlightMetrics),
    NoPath,
}

impl ScenarioOutcome {
    pub fn metrics(&self) -> Option<&FlightMetrics> {
        match self {
            ScenarioOutcome::Completed(metrics) => Some(metrics),
            ScenarioOutcome::NoPath => None,
        }
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, ScenarioOutcome::NoPath)
    }
}

/// Outcome of a named scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub rule: TraversalRule,
    pub config: ScenarioConfig,
    pub outcome: ScenarioOutcome,
}

/// Runs scenarios with a fixed vehicle configuration.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ScenarioConfig,
}

impl ScenarioRunner {
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Plan from `start` to `goal` on `grid` under `rule`.
    ///
    /// The flight altitude is the threshold for the height rule and the
    /// altitude used for battery drain.
    pub fn run(
        &self,
        grid: &GridMap,
        rule: TraversalRule,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<ScenarioOutcome> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        // Reject a bad speed before doing any search work.
        flight_time(0, self.config.speed_mps)?;

        let graph = FlightGraph::build(grid, rule, self.config.altitude_m);
        let result = search(&graph, start, goal);

        let Some(path) = result.path else {
            tracing::debug!(
                %rule,
                %start,
                %goal,
                nodes_visited = result.nodes_visited,
                "no path found"
            );
            return Ok(ScenarioOutcome::NoPath);
        };

        let metrics = compute_metrics(path, self.config.speed_mps, self.config.altitude_m)?;
        tracing::debug!(
            %rule,
            distance = metrics.distance,
            time_s = metrics.time_s,
            battery = metrics.battery_consumed,
            nodes_visited = result.nodes_visited,
            "path found"
        );
        Ok(ScenarioOutcome::Completed(metrics))
    }

    /// Run a named scenario and wrap the outcome in a report.
    pub fn run_scenario(&self, grid: &GridMap, scenario: &Scenario) -> Result<ScenarioReport> {
        let outcome = self.run(grid, scenario.rule, scenario.start, scenario.goal)?;
        Ok(ScenarioReport {
            name: scenario.name.clone(),
            rule: scenario.rule,
            config: self.config,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;

    fn wall_grid() -> GridMap {
        GridMap::from_rows(vec![
            vec![0, 0, 4, 0, 0],
            vec![0, 0, 4, 0, 0],
            vec![0, 0, 5, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn open_grid_reference_run() {
        let grid = GridMap::filled(5, 5, 0).unwrap();
        let runner = ScenarioRunner::new(ScenarioConfig::default().with_altitude(0.0));
        let outcome = runner
            .run(&grid, TraversalRule::Flat, Coordinate::new(0, 0), Coordinate::new(4, 4))
            .unwrap();
        let metrics = outcome.metrics().unwrap();
        assert_eq!(metrics.distance, 8);
        assert!((metrics.time_s - 4.0).abs() < 1e-12);
        assert!((metrics.battery_consumed - 10.0).abs() < 1e-9);
    }

    #[test]
    fn wall_blocks_flat_rule_but_not_height_rule() {
        let grid = wall_grid();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(2, 4);

        let runner = ScenarioRunner::new(ScenarioConfig::default());
        let flat = runner.run(&grid, TraversalRule::Flat, start, goal).unwrap();
        assert!(flat.is_no_path());

        // Wall is 4-5 m tall; at 6 m the vehicle clears it.
        let height = runner
            .run(&grid, TraversalRule::HeightThreshold, start, goal)
            .unwrap();
        assert_eq!(height.metrics().map(|m| m.distance), Some(6));

        let low = ScenarioRunner::new(ScenarioConfig::default().with_altitude(4.0));
        assert!(low
            .run(&grid, TraversalRule::HeightThreshold, start, goal)
            .unwrap()
            .is_no_path());
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let grid = GridMap::filled(3, 3, 0).unwrap();
        let runner = ScenarioRunner::default();
        let err = runner
            .run(&grid, TraversalRule::Flat, Coordinate::new(0, 0), Coordinate::new(3, 0))
            .unwrap_err();
        assert!(matches!(err, PlannerError::OutOfBounds { row: 3, col: 0, .. }));
    }

    #[test]
    fn invalid_speed_is_rejected_even_without_a_path() {
        let runner = ScenarioRunner::new(ScenarioConfig::default().with_speed(0.0));
        let err = runner
            .run(&wall_grid(), TraversalRule::Flat, Coordinate::new(0, 0), Coordinate::new(0, 4))
            .unwrap_err();
        assert_eq!(err, PlannerError::InvalidSpeed(0.0));
    }

    #[test]
    fn blocked_start_is_no_path() {
        let grid = wall_grid();
        let runner = ScenarioRunner::default();
        let outcome = runner
            .run(&grid, TraversalRule::Flat, Coordinate::new(0, 2), Coordinate::new(0, 0))
            .unwrap();
        assert_eq!(outcome, ScenarioOutcome::NoPath);
    }

    #[test]
    fn named_scenario_report() {
        let grid = GridMap::filled(2, 3, 0).unwrap();
        let runner = ScenarioRunner::default();
        let scenario = Scenario::new(
            "short hop",
            TraversalRule::Flat,
            Coordinate::new(0, 0),
            Coordinate::new(1, 2),
        );
        let report = runner.run_scenario(&grid, &scenario).unwrap();
        assert_eq!(report.name, "short hop");
        assert_eq!(report.rule, TraversalRule::Flat);
        assert_eq!(report.config, ScenarioConfig::default());
        assert_eq!(report.outcome.metrics().unwrap().distance, 3);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let value = serde_json::to_value(ScenarioOutcome::NoPath).unwrap();
        assert_eq!(value["status"], "no_path");
    }
}

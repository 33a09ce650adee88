//! UAV grid planner core.
//!
//! Builds a 4-connected graph over the free cells of a grid, finds the
//! shortest route between two cells and derives flight distance, time and
//! battery consumption from it. Flat traversal treats any nonzero cell as an
//! obstacle; height-threshold traversal admits cells lower than the flight
//! altitude.

pub mod compare;
pub mod config;
pub mod cost;
pub mod error;
pub mod graph;
pub mod grid;
pub mod pathfinder;
pub mod presets;
pub mod scenario;
pub mod traversal;

pub use compare::{compare, Comparison, MetricsDelta};
pub use config::ScenarioConfig;
pub use cost::{battery_consumption, compute_metrics, flight_time, FlightMetrics};
pub use error::{PlannerError, Result};
pub use graph::{Edge, FlightGraph};
pub use grid::{Coordinate, GridMap};
pub use pathfinder::{search, shortest_path, Path, SearchResult};
pub use scenario::{Scenario, ScenarioOutcome, ScenarioReport, ScenarioRunner};
pub use traversal::TraversalRule;

//! Built-in reference maps and scenarios.

use crate::grid::{Coordinate, GridMap};
use crate::scenario::Scenario;
use crate::traversal::TraversalRule;

pub const DEFAULT_START: Coordinate = Coordinate::new(0, 0);
pub const DEFAULT_GOAL: Coordinate = Coordinate::new(4, 4);

/// 0 = free, 1 = impassable.
const FLAT_MAP: [[i32; 6]; 5] = [
    [0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0],
];

/// Obstacle heights in meters.
const HEIGHT_MAP: [[i32; 5]; 5] = [
    [0, 0, 0, 0, 0],
    [0, 5, 10, 0, 0],
    [0, 0, 0, 7, 0],
    [0, 8, 0, 0, 0],
    [0, 0, 0, 0, 0],
];

/// Reference obstacle map for flat traversal.
pub fn flat_map() -> GridMap {
    GridMap::from_array(FLAT_MAP)
}

/// Reference obstacle-height map for height-threshold traversal.
pub fn height_map() -> GridMap {
    GridMap::from_array(HEIGHT_MAP)
}

pub fn flat_scenario() -> Scenario {
    Scenario::new("flat", TraversalRule::Flat, DEFAULT_START, DEFAULT_GOAL)
}

pub fn height_scenario() -> Scenario {
    Scenario::new(
        "height-threshold",
        TraversalRule::HeightThreshold,
        DEFAULT_START,
        DEFAULT_GOAL,
    )
}

//! Vehicle configuration for a scenario run.

use serde::{Deserialize, Serialize};

/// Reference flight altitude in meters.
pub const DEFAULT_ALTITUDE_M: f64 = 6.0;
/// Reference cruise speed in grid cells per second.
pub const DEFAULT_SPEED_MPS: f64 = 2.0;
/// Full battery, in percent.
pub const DEFAULT_BATTERY_CAPACITY: f64 = 100.0;

/// Immutable per-run vehicle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Flight altitude in meters. Doubles as the obstacle-height threshold
    /// for height-threshold traversal.
    pub altitude_m: f64,
    /// Cruise speed; each grid step is one distance unit.
    pub speed_mps: f64,
    /// Battery capacity in percent. Reported against, never enforced.
    pub battery_capacity: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            altitude_m: DEFAULT_ALTITUDE_M,
            speed_mps: DEFAULT_SPEED_MPS,
            battery_capacity: DEFAULT_BATTERY_CAPACITY,
        }
    }
}

impl ScenarioConfig {
    pub fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = altitude_m;
        self
    }

    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed_mps = speed_mps;
        self
    }

    pub fn with_battery_capacity(mut self, battery_capacity: f64) -> Self {
        self.battery_capacity = battery_capacity;
        self
    }
}

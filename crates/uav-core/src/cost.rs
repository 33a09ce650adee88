//! Flight cost model: distance, time and battery drain along a path.
//!
//! The battery model is empirical and linear in flight time:
//!
//! ```text
//! battery = time * (1 + (altitude / 100) * 0.3) * 2.5
//! ```
//!
//! 2.5 is the base drain in percent per second and every meter of altitude
//! adds 0.3% to it. Consumption is not clamped to the configured capacity.

use crate::error::{PlannerError, Result};
use crate::pathfinder::Path;
use serde::{Deserialize, Serialize};

/// Extra drain per 100 m of altitude, as a fraction of the base rate.
pub const ALTITUDE_DRAIN_COEFFICIENT: f64 = 0.3;
/// Base battery drain in percent per second.
pub const BASE_DRAIN_RATE: f64 = 2.5;

/// Metrics for a found path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightMetrics {
    /// Grid steps travelled.
    pub distance: u64,
    /// Seconds in flight.
    pub time_s: f64,
    /// Battery used, in percent.
    pub battery_consumed: f64,
    pub path: Path,
}

impl FlightMetrics {
    /// Capacity left after the flight. Negative when the flight overran it.
    pub fn battery_remaining(&self, capacity: f64) -> f64 {
        capacity - self.battery_consumed
    }

    pub fn within_capacity(&self, capacity: f64) -> bool {
        self.battery_consumed <= capacity
    }
}

/// Flight time for `distance` steps at `speed_mps`.
pub fn flight_time(distance: u64, speed_mps: f64) -> Result<f64> {
    // Written so NaN fails too.
    if !(speed_mps > 0.0 && speed_mps.is_finite()) {
        return Err(PlannerError::InvalidSpeed(speed_mps));
    }
    Ok(distance as f64 / speed_mps)
}

/// Battery consumed over `time_s` seconds at `altitude_m`.
pub fn battery_consumption(time_s: f64, altitude_m: f64) -> f64 {
    time_s * (1.0 + (altitude_m / 100.0) * ALTITUDE_DRAIN_COEFFICIENT) * BASE_DRAIN_RATE
}

/// Compute all metrics for `path`.
pub fn compute_metrics(path: Path, speed_mps: f64, altitude_m: f64) -> Result<FlightMetrics> {
    let distance = path.steps() as u64;
    let time_s = flight_time(distance, speed_mps)?;
    Ok(FlightMetrics {
        distance,
        time_s,
        battery_consumed: battery_consumption(time_s, altitude_m),
        path,
    })
}

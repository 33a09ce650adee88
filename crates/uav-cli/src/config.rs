//! Vehicle configuration from environment.

use std::env;
use uav_core::ScenarioConfig;

/// Env-provided overrides. Unset or unparsable variables fall back to the
/// core defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub altitude_m: Option<f64>,
    pub speed_mps: Option<f64>,
    pub battery_capacity: Option<f64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |key: &str| lookup(key).and_then(|s| s.trim().parse::<f64>().ok());
        Self {
            altitude_m: number("UAV_ALTITUDE_M"),
            speed_mps: number("UAV_SPEED_MPS"),
            battery_capacity: number("UAV_BATTERY_CAPACITY"),
        }
    }

    /// Layer command line values over env values over defaults.
    pub fn resolve(
        &self,
        altitude_m: Option<f64>,
        speed_mps: Option<f64>,
        battery_capacity: Option<f64>,
    ) -> ScenarioConfig {
        let defaults = ScenarioConfig::default();
        ScenarioConfig {
            altitude_m: altitude_m
                .or(self.altitude_m)
                .unwrap_or(defaults.altitude_m),
            speed_mps: speed_mps.or(self.speed_mps).unwrap_or(defaults.speed_mps),
            battery_capacity: battery_capacity
                .or(self.battery_capacity)
                .unwrap_or(defaults.battery_capacity),
        }
    }
}

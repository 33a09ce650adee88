//! Free-cell predicates used when building the flight graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule deciding whether the vehicle can occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalRule {
    /// Any nonzero value is an absolute obstacle.
    Flat,
    /// Cell values are obstacle heights; a cell is free when its height is
    /// strictly below the flight altitude.
    HeightThreshold,
}

impl TraversalRule {
    /// Whether a cell holding `value` is free. `threshold` is the flight
    /// altitude and is ignored by [`TraversalRule::Flat`].
    pub fn is_free(&self, value: i32, threshold: f64) -> bool {
        match self {
            TraversalRule::Flat => value == 0,
            TraversalRule::HeightThreshold => f64::from(value) < threshold,
        }
    }

    /// Bind the rule to a threshold, producing a single-argument predicate.
    pub fn with_threshold(self, threshold: f64) -> impl Fn(i32) -> bool {
        move |value| self.is_free(value, threshold)
    }
}

impl fmt::Display for TraversalRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalRule::Flat => write!(f, "flat"),
            TraversalRule::HeightThreshold => write!(f, "height-threshold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_rule_only_admits_zero() {
        let rule = TraversalRule::Flat;
        assert!(rule.is_free(0, 0.0));
        assert!(!rule.is_free(1, 100.0));
        assert!(!rule.is_free(-3, 100.0));
    }

    #[test]
    fn height_rule_is_strictly_below_threshold() {
        let rule = TraversalRule::HeightThreshold;
        assert!(rule.is_free(5, 6.0));
        assert!(!rule.is_free(6, 6.0));
        assert!(!rule.is_free(10, 6.0));
        assert!(!rule.is_free(0, 0.0));
    }

    #[test]
    fn bound_predicate_matches_rule() {
        let free = TraversalRule::HeightThreshold.with_threshold(7.5);
        assert!(free(7));
        assert!(!free(8));
    }
}

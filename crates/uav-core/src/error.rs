//! Error types for the planner core.

use thiserror::Error;

/// Planner error type.
///
/// An unreachable goal is not an error: the path finder returns `None` and the
/// scenario runner reports [`crate::ScenarioOutcome::NoPath`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("coordinate ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("a {rows}x{cols} grid does not fit in memory")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("speed must be positive, got {0}")]
    InvalidSpeed(f64),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

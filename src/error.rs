use grid_util::point::Point;
use thiserror::Error;

/// Ways a path query can fail. [NoPathFound](PathError::NoPathFound) is a
/// normal outcome on a grid with disconnected regions, not a defect.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("cell {0} lies outside the grid or on an obstacle")]
    InvalidCoordinate(Point),

    #[error("no path exists from {start} to {goal}")]
    NoPathFound { start: Point, goal: Point },
}

/// Errors raised while reading a grid from its text representation.
#[derive(Error, Debug)]
pub enum GridLoadError {
    #[error("could not read grid file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid cell value {token:?} at row {row}, column {col}")]
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("grid data ended early: expected {expected} values, found {found}")]
    Truncated { expected: usize, found: usize },
}

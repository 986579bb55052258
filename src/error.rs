use thiserror::Error;

use crate::geometry::{Color, Interval};

/// Top-level error type for ham-sandwich cut computations.
#[derive(Debug, Error)]
pub enum HamCutError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors caused by invalid input, detected before any computation.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{color} point set is empty")]
    EmptyPointSet { color: Color },

    #[error("{color} point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        color: Color,
        index: usize,
        x: f64,
        y: f64,
    },

    #[error("invalid interval ({l}, {r}): bounds must be finite with l < r")]
    InvalidInterval { l: f64, r: f64 },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

/// Errors raised while searching for the dual crossing.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("bisection did not converge after {iterations} iterations; best interval is {interval}")]
    IterationCapReached { iterations: usize, interval: Interval },

    #[error("median levels do not intersect inside {interval}")]
    NoIntersectionFound { interval: Interval },

    #[error("bracketing interval half-width {half_width} is not finite")]
    BracketOverflow { half_width: f64 },

    #[error("median level difference is not finite at x = {x}")]
    NonFiniteLevel { x: f64 },
}

/// Convenience type alias for results using [`HamCutError`].
pub type Result<T> = std::result::Result<T, HamCutError>;
